//! Credential store command handler.

use super::App;
use super::commands::KeyCommands;
use vibecoder::{VibeResult, mask_api_key, require_verified_key};

/// Execute a `key` subcommand.
pub async fn handle_key_command(app: &App, command: KeyCommands) -> VibeResult<()> {
    match command {
        KeyCommands::Set { key, no_verify } => {
            let key = key.trim();
            if key.is_empty() {
                println!("API key is empty; nothing stored.");
                return Ok(());
            }
            if !no_verify && let Err(e) = require_verified_key(&app.client, key).await {
                println!("{}; nothing stored.", e.message);
                return Ok(());
            }
            app.store.set_api_key(key)?;
            println!("Stored API key {}", mask_api_key(key));
        }

        KeyCommands::Show => {
            match app.settings.api_key() {
                Some(key) => println!("API key: {}", mask_api_key(key)),
                None => println!("No API key stored."),
            }
            println!("Include helper library: {}", app.settings.include_gemini_helper());
            println!("Include sample code:    {}", app.settings.include_sample_code());
            println!("Settings file: {}", app.store.path().display());
        }

        KeyCommands::Clear => {
            let mut settings = app.settings.clone();
            settings.clear_api_key();
            app.store.save(&settings)?;
            println!("API key removed.");
        }

        KeyCommands::Context { helper, samples } => {
            let mut settings = app.settings.clone();
            if let Some(helper) = helper {
                settings = settings.with_include_gemini_helper(helper);
            }
            if let Some(samples) = samples {
                settings = settings.with_include_sample_code(samples);
            }
            app.store.save(&settings)?;
            println!(
                "Helper library: {}, sample code: {}",
                settings.include_gemini_helper(),
                settings.include_sample_code()
            );
        }
    }
    Ok(())
}
