//! Effects that record what the session asked for.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use vibecoder_error::EffectError;
use vibecoder_interface::TurnEffects;

/// Records celebrations and clipboard copies.
#[derive(Default)]
pub struct RecordingEffects {
    celebrations: AtomicUsize,
    clipboard: Mutex<Vec<String>>,
    fail_clipboard: bool,
}

#[allow(dead_code)]
impl RecordingEffects {
    /// Effects whose clipboard always fails.
    pub fn broken_clipboard() -> Self {
        Self {
            fail_clipboard: true,
            ..Self::default()
        }
    }

    /// Number of celebrations.
    pub fn celebrations(&self) -> usize {
        self.celebrations.load(Ordering::SeqCst)
    }

    /// Texts copied so far.
    pub fn copies(&self) -> Vec<String> {
        self.clipboard.lock().unwrap().clone()
    }
}

impl TurnEffects for RecordingEffects {
    fn celebrate(&self) {
        self.celebrations.fetch_add(1, Ordering::SeqCst);
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), EffectError> {
        if self.fail_clipboard {
            return Err(EffectError::new("clipboard unavailable"));
        }
        self.clipboard.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
