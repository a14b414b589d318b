//! Terminal celebration and system clipboard.

use std::sync::Mutex;
use tracing::debug;
use vibecoder_error::EffectError;
use vibecoder_interface::TurnEffects;

const BANNER: &str = r"
  *  .  *   .    *   .  *
    Script ready! Copied to your clipboard.
  .   *   .  *    .   *  .
";

/// Effects for terminal use: a banner and the system clipboard.
///
/// The clipboard handle is opened lazily and kept open, since some platforms
/// drop the copied text when the handle closes.
#[derive(Default)]
pub struct TerminalEffects {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl std::fmt::Debug for TerminalEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalEffects").finish_non_exhaustive()
    }
}

impl TerminalEffects {
    /// Create effects with no clipboard opened yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnEffects for TerminalEffects {
    fn celebrate(&self) {
        eprintln!("{}", BANNER);
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), EffectError> {
        let mut guard = self
            .clipboard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| EffectError::new(format!("Clipboard unavailable: {}", e)))?;
            *guard = Some(clipboard);
        }
        if let Some(clipboard) = guard.as_mut() {
            clipboard
                .set_text(text.to_string())
                .map_err(|e| EffectError::new(format!("Clipboard copy failed: {}", e)))?;
            debug!(chars = text.len(), "Copied script to clipboard");
        }
        Ok(())
    }
}
