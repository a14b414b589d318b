//! CLI command definitions.

use clap::{Args, Parser, Subcommand};

/// VibeCoder - describe a Google Apps Script and get working code
#[derive(Parser, Debug)]
#[command(name = "vibecoder")]
#[command(about = "Describe a Google Apps Script and get working code from Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Export tracing spans to stdout
    #[arg(long, global = true)]
    pub trace: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the stored Gemini API key and context toggles
    #[command(subcommand)]
    Key(KeyCommands),

    /// Check that the API key can list models
    Verify,

    /// Suggest script ideas
    Ideas,

    /// Generate a script from a description
    Generate(GenerateArgs),

    /// Suggest a file name for a script description
    Name {
        /// What the script does
        description: String,
    },
}

/// Credential store subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Store an API key
    Set {
        /// The Gemini API key
        key: String,

        /// Store the key without checking it against the API
        #[arg(long)]
        no_verify: bool,
    },

    /// Show the stored key (masked) and context toggles
    Show,

    /// Forget the stored API key
    Clear,

    /// Change which context sections are sent with each prompt
    Context {
        /// Include the helper library
        #[arg(long)]
        helper: Option<bool>,

        /// Include the sample-code corpus
        #[arg(long)]
        samples: Option<bool>,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the script should do
    pub prompt: String,

    /// Model to use (gemini-2.5-pro, gemini-pro, gemini-2.5-flash, gemini-flash);
    /// defaults to `[gemini] default_model`
    #[arg(long)]
    pub model: Option<String>,

    /// Leave the helper library out of the prompt and the output
    #[arg(long)]
    pub no_helper: bool,

    /// Leave the sample-code corpus out of the prompt
    #[arg(long)]
    pub no_samples: bool,

    /// Print the reply as it streams in
    #[arg(long)]
    pub stream: bool,

    /// Print the result and exit without the review loop
    #[arg(long)]
    pub once: bool,
}
