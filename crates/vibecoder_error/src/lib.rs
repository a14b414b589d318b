//! Error types for the VibeCoder script generation pipeline.
//!
//! This crate provides the foundation error types used throughout the VibeCoder workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vibecoder_error::{VibeResult, HttpError};
//!
//! fn fetch_data() -> VibeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod drive;
mod effect;
mod error;
mod gemini;
mod http;
mod idea;
mod json;
mod session;

pub use config::ConfigError;
pub use context::{ContextError, ContextErrorKind};
pub use drive::{DriveError, DriveErrorKind};
pub use effect::EffectError;
pub use error::{VibeError, VibeErrorKind, VibeResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use http::HttpError;
pub use idea::{IdeaError, IdeaErrorKind};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
