//! Session controller errors.

/// Reasons a session action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// Submit was called with an empty or whitespace-only prompt
    #[display("Prompt is empty")]
    EmptyPrompt,
    /// No API key is available for the session
    #[display("No API key configured; add one before generating")]
    MissingCredential,
    /// A refinement was submitted while the session was not asking for one
    #[display("No refinement was requested for the current result")]
    NotRefining,
    /// A Drive action needs a successful result first
    #[display("No generated script to save")]
    NoScript,
    /// Publishing needs the script to be saved first
    #[display("Script must be saved to Drive before publishing")]
    NotSaved,
    /// No Drive proxy is attached to the session
    #[display("No Drive proxy configured")]
    NoPublisher,
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use vibecoder_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::EmptyPrompt);
/// assert_eq!(err.kind, SessionErrorKind::EmptyPrompt);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The error kind
    pub kind: SessionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
