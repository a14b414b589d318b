//! Persistent user settings: API key and context toggles.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use vibecoder_core::GenerationOptions;
use vibecoder_error::{ConfigError, JsonError, VibeResult};

/// File name of the settings document inside the store directory.
pub const SETTINGS_FILE: &str = "settings.json";

fn default_true() -> bool {
    true
}

/// The persisted settings document.
///
/// Key names match the browser storage keys so a settings file can be shared
/// with the web front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Gemini API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(strip_option, into)]
    gemini_api_key: Option<String>,
    /// Include the helper library in prompts and output
    #[serde(default = "default_true")]
    include_gemini_helper: bool,
    /// Include the sample-code corpus in prompts
    #[serde(default = "default_true")]
    include_sample_code: bool,
    /// Google OAuth access token for Drive save and publish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(strip_option, into)]
    google_access_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            include_gemini_helper: true,
            include_sample_code: true,
            google_access_token: None,
        }
    }
}

impl Settings {
    /// The API key, if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Generation options derived from the toggles.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions::new(self.include_gemini_helper, self.include_sample_code)
    }

    /// Forget the stored API key.
    pub fn clear_api_key(&mut self) {
        self.gemini_api_key = None;
    }
}

/// Reads and writes `settings.json` in a directory.
#[derive(Debug, Clone, Getters)]
pub struct CredentialStore {
    /// Directory holding the settings file
    dir: PathBuf,
}

impl CredentialStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory can't be created.
    pub fn new(dir: impl AsRef<Path>) -> VibeResult<Self> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .map_err(|e| ConfigError::store_io("create", &dir, e))?;
        }

        debug!(path = %dir.display(), "Initialized credential store");
        Ok(Self { dir })
    }

    /// Full path to the settings file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Load settings; a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load(&self) -> VibeResult<Settings> {
        let path = self.path();

        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::store_io("read", &path, e))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| JsonError::new(format!("Failed to parse settings file: {}", e)))?;

        debug!(has_key = settings.api_key().is_some(), "Loaded settings");
        Ok(settings)
    }

    /// Write settings, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, settings: &Settings) -> VibeResult<()> {
        let contents = serde_json::to_string_pretty(settings)
            .map_err(|e| JsonError::new(format!("Failed to serialize settings: {}", e)))?;

        let path = self.path();
        std::fs::write(&path, contents).map_err(|e| ConfigError::store_io("write", &path, e))?;

        debug!(has_key = settings.api_key().is_some(), "Saved settings");
        Ok(())
    }

    /// Store a new API key, keeping the other settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings can't be loaded or saved.
    pub fn set_api_key(&self, key: impl Into<String>) -> VibeResult<Settings> {
        let settings = self.load()?.with_gemini_api_key(key.into().trim().to_string());
        self.save(&settings)?;
        Ok(settings)
    }

    /// Remove the settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists and can't be removed.
    pub fn delete(&self) -> VibeResult<()> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| ConfigError::store_io("delete", &path, e))?;
            debug!("Deleted settings");
        }
        Ok(())
    }
}

/// Mask an API key for display: first and last four characters, bullets between.
///
/// Keys of eight characters or fewer are masked entirely.
///
/// # Examples
///
/// ```
/// use vibecoder_config::mask_api_key;
///
/// assert_eq!(mask_api_key("AIzaSyExample1234"), "AIza•••••••••1234");
/// assert_eq!(mask_api_key("short"), "•••••");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "•".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "•".repeat(chars.len() - 8), tail)
}
