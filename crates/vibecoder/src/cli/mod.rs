//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vibecoder binary.

mod app;
mod assist;
mod commands;
mod generate;
mod key;
mod render;

pub use app::App;
pub use assist::{run_ideas, run_name, run_verify};
pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use key::handle_key_command;
