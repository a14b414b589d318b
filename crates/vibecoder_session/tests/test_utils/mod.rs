//! Test utilities for session controller tests.

pub mod mock_drive;
pub mod mock_effects;
pub mod mock_gemini;

#[allow(unused_imports)]
pub use mock_drive::MockDrive;
#[allow(unused_imports)]
pub use mock_effects::RecordingEffects;
#[allow(unused_imports)]
pub use mock_gemini::{MockBehavior, MockGemini};

use std::sync::Arc;
use vibecoder_session::{SessionController, TurnSettings};

/// A reply with one fenced block and an explanation.
#[allow(dead_code)]
pub const SCRIPT_REPLY: &str = "```javascript\n  function main() {}\n```\nRuns main.";

/// Settings with a usable API key.
#[allow(dead_code)]
pub fn keyed_settings() -> TurnSettings {
    TurnSettings::default().with_api_key("AIza-test-key")
}

/// Session over `driver` with recording effects.
#[allow(dead_code)]
pub fn session_with(
    driver: Arc<MockGemini>,
    effects: Arc<RecordingEffects>,
) -> SessionController {
    SessionController::new(driver, keyed_settings()).with_effects(effects)
}
