//! VibeCoder - describe a Google Apps Script, get working code.
//!
//! VibeCoder turns a plain-language description into an Apps Script. The
//! prompt is wrapped in a system prompt built from a helper library and a
//! sample corpus, sent to Gemini, and the reply is split into code and an
//! explanation. A session controller runs the describe, review, refine loop
//! and can save or publish the result through a Drive proxy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vibecoder::{
//!     ContextLoader, GeminiClient, SessionController, SharedContext, TurnSettings, VibeConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VibeConfig::load()?;
//!     let context = SharedContext::new(ContextLoader::from_config(&config.context));
//!     let client = GeminiClient::new(config.gemini.clone(), context)?;
//!
//!     let settings = TurnSettings::default().with_api_key(std::env::var("GEMINI_API_KEY")?);
//!     let session = SessionController::new(Arc::new(client), settings);
//!     let outcome = session.submit("Email me a summary of Sheet1 every Monday").await?;
//!     if let Some(result) = outcome.result() {
//!         println!("{}", result.code().unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `vibecoder_error` - Error types
//! - `vibecoder_core` - Requests, results, model choices, ideas, Drive payloads
//! - `vibecoder_interface` - Driver, streaming, idea, naming, effect and Drive traits
//! - `vibecoder_config` - Layered configuration and the credential store
//! - `vibecoder_context` - Static context loading and caching
//! - `vibecoder_prompt` - Prompt assembly, response splitting, display helpers
//! - `vibecoder_models` - Gemini REST client
//! - `vibecoder_drive` - Drive / Apps Script proxy client
//! - `vibecoder_session` - Session state machine
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod effects;

pub use effects::TerminalEffects;

pub use vibecoder_config::*;
pub use vibecoder_context::*;
pub use vibecoder_core::*;
pub use vibecoder_drive::*;
pub use vibecoder_error::*;
pub use vibecoder_interface::*;
pub use vibecoder_models::*;
pub use vibecoder_prompt::*;
pub use vibecoder_session::*;
