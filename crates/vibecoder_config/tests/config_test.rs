//! Configuration file loading tests.

use vibecoder_config::{ContextConfig, VibeConfig};
use vibecoder_core::ModelChoice;

#[test]
fn partial_file_keeps_section_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("vibecoder.toml");
    std::fs::write(
        &path,
        r#"
[proxy]
base_url = "https://proxy.example.test"
"#,
    )?;

    let config = VibeConfig::from_file(&path)?;
    assert_eq!(config.proxy.base_url, "https://proxy.example.test");
    assert_eq!(config.gemini.top_k, 40);
    assert_eq!(config.gemini.default_model, ModelChoice::Gemini25Pro);
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let result = VibeConfig::from_file("/definitely/not/here/vibecoder.toml");
    assert!(result.is_err());
}

#[test]
fn configured_default_model_applies_without_flag() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("vibecoder.toml");
    std::fs::write(
        &path,
        r#"
[gemini]
base_url = "https://generativelanguage.googleapis.com/v1beta"
default_model = "gemini-2.5-flash"
idea_model = "gemini-2.0-flash"
temperature = 0.7
top_k = 40
top_p = 0.95
max_output_tokens = 8192
idea_temperature = 0.8
idea_max_output_tokens = 1024
timeout_secs = 180
"#,
    )?;

    let config = VibeConfig::from_file(&path)?;
    assert_eq!(config.gemini.choose_model(None), ModelChoice::Gemini25Flash);
    assert_eq!(
        config.gemini.choose_model(Some("gemini-2.5-pro")),
        ModelChoice::Gemini25Pro
    );
    Ok(())
}

#[test]
fn relative_context_dir_prefers_working_directory() -> anyhow::Result<()> {
    let cwd = tempfile::tempdir()?;
    let home = tempfile::tempdir()?;
    std::fs::create_dir(cwd.path().join("context"))?;
    std::fs::create_dir(home.path().join("context"))?;

    let context = ContextConfig::default();
    assert_eq!(
        context.local_dir_from(cwd.path(), Some(home.path())),
        cwd.path().join("context")
    );
    Ok(())
}

#[test]
fn relative_context_dir_falls_back_to_config_home() -> anyhow::Result<()> {
    let cwd = tempfile::tempdir()?;
    let home = tempfile::tempdir()?;
    std::fs::create_dir(home.path().join("context"))?;

    let context = ContextConfig::default();
    assert_eq!(
        context.local_dir_from(cwd.path(), Some(home.path())),
        home.path().join("context")
    );
    assert_eq!(
        context.local_dir_from(cwd.path(), None),
        cwd.path().join("context")
    );
    Ok(())
}

#[test]
fn absolute_context_dir_is_kept() -> anyhow::Result<()> {
    let cwd = tempfile::tempdir()?;
    let elsewhere = tempfile::tempdir()?;
    let context = ContextConfig {
        source: elsewhere.path().display().to_string(),
        ..ContextConfig::default()
    };
    assert_eq!(context.local_dir_from(cwd.path(), None), elsewhere.path());
    Ok(())
}
