//! Key verification, ideas, and naming handlers.

use super::App;
use vibecoder::{
    KeyVerification, ScriptNaming, VibeResult, fallback_ideas, fallback_script_name,
    ideas_or_fallback,
};

/// Check the configured API key.
pub async fn run_verify(app: &App) -> VibeResult<()> {
    let Some(key) = app.api_key() else {
        println!("No API key configured. Run `vibecoder key set <KEY>`.");
        return Ok(());
    };
    if app.client.verify_key(&key).await {
        println!("API key is valid.");
    } else {
        println!("API key was rejected.");
    }
    Ok(())
}

/// Print up to five ideas, or the built-in set.
pub async fn run_ideas(app: &App) {
    let ideas = match app.api_key() {
        Some(key) => ideas_or_fallback(&app.client, &key).await,
        None => fallback_ideas(),
    };
    for (i, idea) in ideas.iter().enumerate() {
        println!("{:>2}. {}\n    {}", i + 1, idea.short_label(), idea.long_prompt());
    }
}

/// Print a suggested script name.
pub async fn run_name(app: &App, description: &str) {
    let name = match app.api_key() {
        Some(key) => app.client.suggest_script_name(description, &key).await,
        None => fallback_script_name(description),
    };
    println!("{}", name);
}
