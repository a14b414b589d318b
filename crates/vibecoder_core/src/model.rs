//! User-facing model choices.

use serde::{Deserialize, Serialize};

/// The closed set of models offered to the user.
///
/// The user-facing identifier is what the settings store and the CLI accept;
/// [`ModelChoice::provider_id`] is the identifier sent to the Gemini API.
/// Unknown identifiers fall back to [`ModelChoice::default`], the most capable model.
///
/// # Examples
///
/// ```
/// use vibecoder_core::ModelChoice;
///
/// assert_eq!(ModelChoice::parse_or_default("gemini-flash"), ModelChoice::GeminiFlash);
/// assert_eq!(ModelChoice::parse_or_default("gpt-4"), ModelChoice::Gemini25Pro);
/// assert_eq!(ModelChoice::Gemini25Pro.to_string(), "gemini-2.5-pro");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
)]
pub enum ModelChoice {
    /// Gemini 2.5 Pro, the default
    #[default]
    #[strum(serialize = "gemini-2.5-pro")]
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,
    /// Gemini 1.5 Pro
    #[strum(serialize = "gemini-pro")]
    #[serde(rename = "gemini-pro")]
    GeminiPro,
    /// Gemini 2.5 Flash
    #[strum(serialize = "gemini-2.5-flash")]
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    /// Gemini 1.5 Flash
    #[strum(serialize = "gemini-flash")]
    #[serde(rename = "gemini-flash")]
    GeminiFlash,
}

impl ModelChoice {
    /// Parse a user-facing identifier, falling back to the default model.
    pub fn parse_or_default(id: &str) -> Self {
        id.trim().parse().unwrap_or_default()
    }

    /// Built-in provider model identifier.
    ///
    /// Configuration may override this mapping; see `GeminiConfig::provider_model`.
    pub fn provider_id(&self) -> &'static str {
        match self {
            ModelChoice::Gemini25Pro => "gemini-2.5-pro-preview-05-06",
            ModelChoice::GeminiPro => "gemini-1.5-pro",
            ModelChoice::Gemini25Flash => "gemini-2.5-flash-preview-04-17",
            ModelChoice::GeminiFlash => "gemini-1.5-flash",
        }
    }

    /// Short human label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::Gemini25Pro => "Gemini 2.5 Pro",
            ModelChoice::GeminiPro => "Gemini Pro",
            ModelChoice::Gemini25Flash => "Gemini 2.5 Flash",
            ModelChoice::GeminiFlash => "Gemini Flash",
        }
    }
}
