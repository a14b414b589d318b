//! Gemini model client for VibeCoder.
//!
//! [`GeminiClient`] talks to the Generative Language REST API directly with
//! `reqwest`: buffered and streamed script generation, key verification,
//! idea suggestions and script naming. Every failure is folded into a
//! [`vibecoder_core::GenerationResult`] or a terminal
//! [`vibecoder_core::StreamEvent`]; nothing is retried automatically.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collect;
mod gemini;
mod ideas;
mod keys;
mod naming;

pub use collect::collect_stream;
pub use gemini::{
    interpret_error, interpret_generate_response, models_listed, parse_stream_line, Fragment,
    GeminiClient, LineBuffer,
};
pub use ideas::{ideas_or_fallback, parse_ideas, IDEA_PROMPT};
pub use keys::require_verified_key;
pub use naming::{fallback_script_name, sanitize_script_name, DEFAULT_SCRIPT_NAME};
