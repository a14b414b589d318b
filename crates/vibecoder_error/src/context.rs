//! Static context loading errors.

/// Static context loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContextErrorKind {
    /// A resource answered with a non-success status
    #[display("Failed to load {}: HTTP {}", resource, status_code)]
    Fetch {
        /// Resource path that failed
        resource: String,
        /// HTTP status code
        status_code: u16,
    },
    /// A resource could not be reached or read
    #[display("Failed to load {}: {}", resource, message)]
    Transport {
        /// Resource path that failed
        resource: String,
        /// Underlying error message
        message: String,
    },
    /// No source is configured for static context
    #[display("No static context source configured")]
    NoSource,
}

/// Static context error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Context Error: {} at line {} in {}", kind, line, file)]
pub struct ContextError {
    /// The error kind
    pub kind: ContextErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ContextError {
    /// Create a new ContextError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContextErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
