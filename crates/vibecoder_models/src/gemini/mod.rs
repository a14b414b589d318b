//! Google Gemini REST integration.

mod client;
mod sse;
mod wire;

pub use client::GeminiClient;
pub use sse::{parse_stream_line, Fragment, LineBuffer};
pub use wire::{interpret_error, interpret_generate_response, models_listed};
pub(crate) use wire::{Content, GenerateContentRequest};
