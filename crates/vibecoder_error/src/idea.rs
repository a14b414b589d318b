//! Idea suggestion errors.

/// Reasons an idea suggestion response was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IdeaErrorKind {
    /// The text was not JSON at all
    #[display("Failed to parse generated ideas: {}", _0)]
    Parse(String),
    /// JSON parsed but did not have the expected shape
    #[display("Generated ideas have invalid format: {}", _0)]
    InvalidFormat(String),
}

/// Idea suggestion error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Idea Error: {} at line {} in {}", kind, line, file)]
pub struct IdeaError {
    /// The error kind
    pub kind: IdeaErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl IdeaError {
    /// Create a new IdeaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IdeaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
