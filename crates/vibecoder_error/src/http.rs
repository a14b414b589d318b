//! Transport error types.

/// Transport-level HTTP failure with source location.
///
/// Used when a request never produced a usable response: connection refused,
/// timeout, or a body that could not be read. Non-success statuses from the
/// model endpoint are reported through [`crate::GeminiErrorKind::HttpError`]
/// instead, because they carry a provider message.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibecoder_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an error describing a failed request to `url`.
    #[track_caller]
    pub fn request_failed(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(format!("Request to {} failed: {}", url, reason))
    }
}
