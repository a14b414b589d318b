//! VibeCoder CLI binary.
//!
//! This binary provides terminal access to VibeCoder:
//! - Store and verify a Gemini API key
//! - Suggest script ideas
//! - Generate, review, refine, save and publish scripts
//! - Suggest a script name

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{handle_key_command, run_generate, run_ideas, run_name, run_verify, App, Cli, Commands};

    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if cli.trace {
        vibecoder::init_telemetry(if cli.verbose { "debug" } else { "info" })?;
    } else {
        let log_level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let app = App::load()?;

    match cli.command {
        Commands::Key(key_cmd) => handle_key_command(&app, key_cmd).await?,
        Commands::Verify => run_verify(&app).await?,
        Commands::Ideas => run_ideas(&app).await,
        Commands::Generate(args) => run_generate(&app, args).await?,
        Commands::Name { description } => run_name(&app, &description).await,
    }

    if cli.trace {
        vibecoder::shutdown_telemetry();
    }
    Ok(())
}
