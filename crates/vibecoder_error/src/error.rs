//! Top-level error wrapper types.

use crate::{
    ConfigError, ContextError, DriveError, EffectError, GeminiError, HttpError, IdeaError,
    JsonError, SessionError,
};

/// Every error condition the VibeCoder crates can surface.
///
/// # Examples
///
/// ```
/// use vibecoder_error::{VibeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VibeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VibeErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini model error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Static context loading error
    #[from(ContextError)]
    Context(ContextError),
    /// Idea suggestion error
    #[from(IdeaError)]
    Idea(IdeaError),
    /// Session controller error
    #[from(SessionError)]
    Session(SessionError),
    /// Drive proxy error
    #[from(DriveError)]
    Drive(DriveError),
    /// Best-effort side effect error
    #[from(EffectError)]
    Effect(EffectError),
}

/// VibeCoder error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vibecoder_error::{VibeError, VibeResult, ConfigError};
///
/// fn might_fail() -> VibeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("VibeCoder Error: {}", _0)]
pub struct VibeError(Box<VibeErrorKind>);

impl VibeError {
    /// Create a new error from a kind.
    pub fn new(kind: VibeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VibeErrorKind {
        &self.0
    }
}

impl<T> From<T> for VibeError
where
    T: Into<VibeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for VibeCoder operations.
///
/// # Examples
///
/// ```
/// use vibecoder_error::{VibeResult, HttpError};
///
/// fn fetch_data() -> VibeResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type VibeResult<T> = std::result::Result<T, VibeError>;
