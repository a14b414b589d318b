//! Checking a loaded API key before it is used.

use tracing::{debug, instrument, warn};
use vibecoder_error::ConfigError;
use vibecoder_interface::KeyVerification;

/// Reject a blank key or one the provider will not list models for.
///
/// Runs whenever a stored key is loaded for use and before a new key is saved.
///
/// # Errors
///
/// A [`ConfigError`] naming the problem; the key itself is never included.
#[instrument(skip_all)]
pub async fn require_verified_key(
    verifier: &dyn KeyVerification,
    api_key: &str,
) -> Result<(), ConfigError> {
    let key = api_key.trim();
    if key.is_empty() {
        return Err(ConfigError::new("No Gemini API key configured"));
    }
    if !verifier.verify_key(key).await {
        warn!("Gemini API key failed verification");
        return Err(ConfigError::new(
            "Gemini API key was rejected; store a valid key before generating",
        ));
    }
    debug!("Gemini API key verified");
    Ok(())
}
