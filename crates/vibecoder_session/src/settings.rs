//! Per-session generation settings.

use derive_getters::Getters;
use derive_setters::Setters;
use vibecoder_config::Settings;
use vibecoder_core::{GenerationOptions, ModelChoice};

/// Credential, model, and context toggles applied to each new turn.
#[derive(Clone, Default, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct TurnSettings {
    /// Gemini API key
    #[setters(strip_option, into)]
    pub(crate) api_key: Option<String>,
    /// Model used for new requests
    pub(crate) model: ModelChoice,
    /// Context toggles
    pub(crate) options: GenerationOptions,
}

impl TurnSettings {
    /// The API key, if one is set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl std::fmt::Debug for TurnSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("options", &self.options)
            .finish()
    }
}

impl From<&Settings> for TurnSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            api_key: settings.api_key().map(str::to_string),
            model: ModelChoice::default(),
            options: settings.options(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_no_credential() {
        let settings = TurnSettings::default().with_api_key("   ");
        assert_eq!(settings.credential(), None);
        assert_eq!(
            TurnSettings::default().with_api_key(" AIza ").credential(),
            Some("AIza")
        );
    }

    #[test]
    fn debug_hides_key() {
        let settings = TurnSettings::default().with_api_key("AIzaSecret");
        assert!(!format!("{:?}", settings).contains("AIzaSecret"));
    }

    #[test]
    fn stored_settings_carry_over() {
        let stored = Settings::default()
            .with_gemini_api_key("AIza")
            .with_include_sample_code(false);
        let turn = TurnSettings::from(&stored);
        assert_eq!(turn.credential(), Some("AIza"));
        assert!(*turn.options().include_helper());
        assert!(!*turn.options().include_sample_code());
    }
}
