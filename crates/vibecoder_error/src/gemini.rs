//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
///
/// The `Display` output of a kind is what ends up in a failed
/// `GenerationResult::error`, so the messages are written for end users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// No API key was supplied for a call that needs one
    #[display("No Gemini API key configured")]
    MissingApiKey,
    /// Failed to build the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Network or transport failure before a response was received
    #[display("{}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status with the provider's message
    #[display("API error ({}): {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Provider error message
        message: String,
    },
    /// The model answered but produced no text
    #[display("No content was generated")]
    EmptyContent,
    /// The response body could not be decoded
    #[display("Invalid response from Gemini: {}", _0)]
    InvalidResponse(String),
    /// The byte stream failed mid-generation
    #[display("Stream interrupted: {}", _0)]
    StreamInterrupted(String),
}

impl GeminiErrorKind {
    /// Check if this error is transient.
    ///
    /// The client never retries on its own; this only informs the caller
    /// whether offering a resubmission is likely to help.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeminiErrorKind::ApiRequest(_) => true,
            GeminiErrorKind::StreamInterrupted(_) => true,
            _ => false,
        }
    }

    /// Suggested wait before resubmitting, in seconds.
    pub fn suggested_backoff_secs(&self) -> Option<u64> {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => match *status_code {
                429 => Some(30),
                503 => Some(10),
                500 | 502 | 504 => Some(2),
                408 => Some(5),
                _ => None,
            },
            GeminiErrorKind::ApiRequest(_) | GeminiErrorKind::StreamInterrupted(_) => Some(2),
            _ => None,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use vibecoder_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "quota exceeded".to_string(),
/// });
/// assert_eq!(err.kind.to_string(), "API error (429): quota exceeded");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The user-facing message, without source location.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}

/// Trait for errors that can tell whether resubmitting may succeed.
///
/// # Examples
///
/// ```
/// use vibecoder_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// assert_eq!(err.suggested_backoff_secs(), Some(10));
/// ```
pub trait RetryableError {
    /// Returns true if a user-initiated resubmission may succeed.
    fn is_retryable(&self) -> bool;

    /// Suggested delay before resubmitting, if any.
    fn suggested_backoff_secs(&self) -> Option<u64> {
        None
    }
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn suggested_backoff_secs(&self) -> Option<u64> {
        self.kind.suggested_backoff_secs()
    }
}
