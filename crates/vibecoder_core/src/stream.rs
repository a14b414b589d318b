//! Streaming generation events.

use serde::{Deserialize, Serialize};

/// One event in a streamed generation.
///
/// A stream yields zero or more deltas and then exactly one final event.
/// The final event carries an error when the stream ended abnormally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StreamEvent {
    /// Whether this is the last event of the stream
    is_final: bool,
    /// Text appended since the previous event
    text_delta: Option<String>,
    /// Terminal error message
    error: Option<String>,
    /// Milliseconds since the request was dispatched
    elapsed_ms: u64,
}

impl StreamEvent {
    /// A chunk of generated text.
    pub fn delta(text: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            is_final: false,
            text_delta: Some(text.into()),
            error: None,
            elapsed_ms,
        }
    }

    /// Normal end of stream.
    pub fn finished(elapsed_ms: u64) -> Self {
        Self {
            is_final: true,
            text_delta: None,
            error: None,
            elapsed_ms,
        }
    }

    /// Abnormal end of stream.
    pub fn failed(error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            is_final: true,
            text_delta: None,
            error: Some(error.into()),
            elapsed_ms,
        }
    }
}
