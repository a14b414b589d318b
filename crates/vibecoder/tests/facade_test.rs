//! End-to-end checks of the bundled configuration and context files.

use std::path::PathBuf;
use std::sync::Arc;
use vibecoder::{
    ContextLoader, ContextPaths, DirectorySource, GenerationOptions, HELPER_MARKER,
    SharedContext, VibeConfig, build_system_prompt, process_response,
};

fn bundled_context_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../context")
}

fn bundled_loader() -> anyhow::Result<ContextLoader> {
    let config = VibeConfig::bundled()?;
    Ok(ContextLoader::new(
        Arc::new(DirectorySource::new(bundled_context_dir())),
        ContextPaths::from(&config.context),
    ))
}

#[tokio::test]
async fn test_bundled_context_files_load() -> anyhow::Result<()> {
    let context = SharedContext::new(bundled_loader()?);
    assert!(context.ensure_loaded().await);

    let snapshot = context.snapshot();
    assert!(snapshot.helper_source().contains("function callGemini"));
    assert!(snapshot.helper_docs().contains("callGemini(prompt, options)"));
    assert!(snapshot.sample_code().contains("MailApp.sendEmail"));
    Ok(())
}

#[tokio::test]
async fn test_toggles_shape_prompt_and_output() -> anyhow::Result<()> {
    let context = SharedContext::new(bundled_loader()?);
    context.ensure_loaded().await;
    let snapshot = context.snapshot();

    let full = build_system_prompt(&GenerationOptions::new(true, true), &snapshot);
    assert!(full.contains("callGemini(prompt, options)"));
    assert!(full.contains("MailApp.sendEmail"));

    let bare = build_system_prompt(&GenerationOptions::new(false, false), &snapshot);
    assert!(!bare.contains("callGemini(prompt, options)"));
    assert!(!bare.contains("MailApp.sendEmail"));

    let reply = "```javascript\nfunction main() { callGemini('hi'); }\n```\nCalls Gemini.";
    let with_helper = process_response(reply, true, &snapshot);
    assert!(with_helper.code().contains(HELPER_MARKER));
    assert_eq!(with_helper.code().matches(HELPER_MARKER).count(), 1);

    let without_helper = process_response(reply, false, &snapshot);
    assert_eq!(without_helper.code(), "function main() { callGemini('hi'); }");
    Ok(())
}
