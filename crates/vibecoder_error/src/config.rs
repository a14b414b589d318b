//! Configuration error types.

/// Configuration error with source location.
///
/// Covers unreadable or malformed `vibecoder.toml` files and credential store
/// I/O failures.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibecoder_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing required field: gemini.base_url");
    /// assert!(err.message.contains("gemini.base_url"));
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

    /// A failed file operation on the settings store.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use vibecoder_error::ConfigError;
    ///
    /// let err = ConfigError::store_io("read", Path::new("/tmp/settings.json"), "permission denied");
    /// assert_eq!(err.message, "Failed to read /tmp/settings.json: permission denied");
    /// ```
    #[track_caller]
    pub fn store_io(
        action: &str,
        path: &std::path::Path,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::new(format!("Failed to {} {}: {}", action, path.display(), reason))
    }
}
