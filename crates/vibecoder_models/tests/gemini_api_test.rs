// Real Gemini API tests.
//
// Run with: cargo test -p vibecoder_models --features api
// Requires GEMINI_API_KEY in the environment or a .env file.

use vibecoder_config::GeminiConfig;
use vibecoder_context::SharedContext;
use vibecoder_core::{GenerationOptions, GenerationRequest, ModelChoice};
use vibecoder_interface::{IdeaSource, KeyVerification, ScriptDriver, ScriptNaming};
use vibecoder_models::GeminiClient;

fn api_key() -> String {
    let _ = dotenvy::dotenv();
    std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set for api tests")
}

fn client() -> anyhow::Result<GeminiClient> {
    Ok(GeminiClient::new(
        GeminiConfig::default(),
        SharedContext::empty(),
    )?)
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_verify_real_key() -> anyhow::Result<()> {
    let client = client()?;
    assert!(client.verify_key(&api_key()).await);
    assert!(!client.verify_key("not-a-real-key").await);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_generate_real_script() -> anyhow::Result<()> {
    let client = client()?;
    let request = GenerationRequest::builder()
        .prompt("Log the name of the active spreadsheet.")
        .model(ModelChoice::GeminiFlash)
        .options(GenerationOptions::new(false, false))
        .build()?;

    let result = client.generate(&request, &api_key()).await;
    assert!(result.is_success(), "error: {:?}", result.error());
    assert!(!result.code().unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_real_ideas_and_name() -> anyhow::Result<()> {
    let client = client()?;
    let ideas = client.fetch_ideas(&api_key()).await?;
    assert!(!ideas.is_empty() && ideas.len() <= 5);

    let name = client
        .suggest_script_name("Send weekly sales summaries by email", &api_key())
        .await;
    assert!(!name.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_bad_key_is_a_failed_result_not_a_panic() -> anyhow::Result<()> {
    let client = client()?;
    let request = GenerationRequest::builder().prompt("anything").build()?;
    let result = client.generate(&request, "").await;
    assert!(!result.is_success());
    assert_eq!(result.error(), Some("No Gemini API key configured"));
    Ok(())
}
