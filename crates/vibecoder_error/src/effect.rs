//! Side-effect error types.

/// Failure of a best-effort side effect such as a clipboard copy.
///
/// These errors are logged and swallowed by the session controller; they never
/// change the outcome of a generation turn.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Effect Error: {} at line {} in {}", message, line, file)]
pub struct EffectError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EffectError {
    /// Create a new EffectError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
