//! Drive and Apps Script proxy errors.

/// Drive proxy failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DriveErrorKind {
    /// No Google access token was supplied
    #[display("No Google access token available. Please login with Google.")]
    MissingToken,
    /// No script content or script id was supplied
    #[display("Missing script {}", _0)]
    MissingScript(String),
    /// The Google token expired; the user must sign in again
    #[display("Google API token expired. Please log in again.")]
    NeedsReauth,
    /// The proxy reported a failure
    #[display("Drive proxy error ({}): {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message from the proxy
        message: String,
    },
    /// The proxy could not be reached or answered garbage
    #[display("Drive proxy request failed: {}", _0)]
    Transport(String),
}

/// Drive proxy error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Drive Error: {} at line {} in {}", kind, line, file)]
pub struct DriveError {
    /// The error kind
    pub kind: DriveErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl DriveError {
    /// Create a new DriveError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DriveErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the caller should send the user through sign-in again.
    pub fn needs_reauth(&self) -> bool {
        matches!(self.kind, DriveErrorKind::NeedsReauth)
    }
}
