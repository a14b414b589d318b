//! The normalized outcome of a generation call.

use serde::{Deserialize, Serialize};

/// Result of one generation request, produced exactly once per request.
///
/// Construct with [`GenerationResult::success`] or [`GenerationResult::failure`];
/// the constructors uphold that a success always has `code` and a failure
/// never has `code` or `explanation`.
///
/// # Examples
///
/// ```
/// use vibecoder_core::GenerationResult;
///
/// let ok = GenerationResult::success("raw", "function main() {}", "Runs main.", 120);
/// assert!(ok.is_success());
/// assert_eq!(ok.code(), Some("function main() {}"));
///
/// let failed = GenerationResult::failure("API error (429): quota exceeded", 40);
/// assert!(!failed.is_success());
/// assert!(failed.code().is_none());
/// assert_eq!(failed.response_time_ms(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    success: bool,
    raw_content: Option<String>,
    code: Option<String>,
    explanation: Option<String>,
    error: Option<String>,
    response_time_ms: u64,
}

impl GenerationResult {
    /// A successful result.
    pub fn success(
        raw_content: impl Into<String>,
        code: impl Into<String>,
        explanation: impl Into<String>,
        response_time_ms: u64,
    ) -> Self {
        Self {
            success: true,
            raw_content: Some(raw_content.into()),
            code: Some(code.into()),
            explanation: Some(explanation.into()),
            error: None,
            response_time_ms,
        }
    }

    /// A failed result carrying a user-facing message.
    pub fn failure(error: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            success: false,
            raw_content: None,
            code: None,
            explanation: None,
            error: Some(error.into()),
            response_time_ms,
        }
    }

    /// Whether generation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Unprocessed model text.
    pub fn raw_content(&self) -> Option<&str> {
        self.raw_content.as_deref()
    }

    /// Extracted script source.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Prose accompanying the script.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Failure message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Milliseconds from dispatch to full resolution.
    pub fn response_time_ms(&self) -> u64 {
        self.response_time_ms
    }
}
