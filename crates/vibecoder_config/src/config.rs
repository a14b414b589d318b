//! Layered TOML configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from vibecoder.toml)
//! - `~/.config/vibecoder/vibecoder.toml`
//! - `./vibecoder.toml`

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use vibecoder_core::ModelChoice;
use vibecoder_error::{ConfigError, VibeError, VibeResult};

const DEFAULT_CONFIG: &str = include_str!("../../../vibecoder.toml");

/// Gemini endpoint and sampling parameters.
///
/// # Model mapping
///
/// ```toml
/// [gemini.models]
/// "gemini-2.5-pro" = "gemini-2.5-pro"
/// ```
///
/// Entries override the built-in provider id for a user-facing model choice.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Model used when the user has not picked one
    #[serde(default)]
    pub default_model: ModelChoice,
    /// Provider model used for idea suggestions and script naming
    pub idea_model: String,
    /// Sampling temperature for script generation
    pub temperature: f32,
    /// Top-k sampling for script generation
    pub top_k: u32,
    /// Nucleus sampling for script generation
    pub top_p: f32,
    /// Output token cap for script generation
    pub max_output_tokens: u32,
    /// Sampling temperature for idea suggestions
    pub idea_temperature: f32,
    /// Output token cap for idea suggestions
    pub idea_max_output_tokens: u32,
    /// Seconds allowed for a buffered request, and between chunks of a stream
    pub timeout_secs: u64,
    /// User-facing model id to provider model id overrides
    #[serde(default)]
    pub models: HashMap<String, String>,
}

impl GeminiConfig {
    /// The requested model, or `default_model` when none was given.
    ///
    /// Unknown identifiers fall back to the built-in default choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibecoder_config::GeminiConfig;
    /// use vibecoder_core::ModelChoice;
    ///
    /// let mut gemini = GeminiConfig::default();
    /// gemini.default_model = ModelChoice::GeminiFlash;
    /// assert_eq!(gemini.choose_model(None), ModelChoice::GeminiFlash);
    /// assert_eq!(gemini.choose_model(Some("gemini-pro")), ModelChoice::GeminiPro);
    /// ```
    pub fn choose_model(&self, requested: Option<&str>) -> ModelChoice {
        requested
            .map(ModelChoice::parse_or_default)
            .unwrap_or(self.default_model)
    }

    /// Resolve the provider model id for a choice, honoring overrides.
    pub fn provider_model(&self, choice: ModelChoice) -> String {
        self.models
            .get(choice.as_ref())
            .cloned()
            .unwrap_or_else(|| choice.provider_id().to_string())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            default_model: ModelChoice::default(),
            idea_model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
            idea_temperature: 0.8,
            idea_max_output_tokens: 1024,
            timeout_secs: 180,
            models: HashMap::new(),
        }
    }
}

/// Where the static context resources live.
///
/// `source` is either an `http(s)://` base URL or a local directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContextConfig {
    /// Base URL or directory holding the three resources
    pub source: String,
    /// Helper library source path, relative to `source`
    pub helper_source: String,
    /// Helper library reference docs path, relative to `source`
    pub helper_docs: String,
    /// Sample code corpus path, relative to `source`
    pub sample_code: String,
}

impl ContextConfig {
    /// True when `source` is an `http://` or `https://` base URL.
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }

    /// Directory holding the resources when `source` is local.
    ///
    /// An absolute `source` is used as is. A relative one is looked up under
    /// the working directory first, then under the vibecoder config
    /// directory; when neither exists the working-directory path is returned.
    pub fn local_dir(&self) -> PathBuf {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config_home = dirs::config_dir().map(|d| d.join("vibecoder"));
        self.local_dir_from(&cwd, config_home.as_deref())
    }

    /// [`ContextConfig::local_dir`] with explicit search roots.
    pub fn local_dir_from(&self, cwd: &Path, config_home: Option<&Path>) -> PathBuf {
        let source = Path::new(&self.source);
        if source.is_absolute() {
            return source.to_path_buf();
        }

        let in_cwd = cwd.join(source);
        if in_cwd.is_dir() {
            return in_cwd;
        }
        match config_home.map(|home| home.join(source)) {
            Some(in_home) if in_home.is_dir() => in_home,
            _ => in_cwd,
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            source: "context".to_string(),
            helper_source: "gemini-helper.gs".to_string(),
            helper_docs: "gemini-helper.md".to_string(),
            sample_code: "sample-code.md".to_string(),
        }
    }
}

/// Drive / Apps Script proxy location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Proxy base URL, without trailing slash
    pub base_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8787".to_string(),
        }
    }
}

/// Credential store location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    /// Directory for `settings.json`; the platform config dir when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Directory the credential store should use.
    pub fn resolve_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()
                .map(|d| d.join("vibecoder"))
                .unwrap_or_else(|| PathBuf::from(".vibecoder")),
        }
    }
}

/// Top-level VibeCoder configuration.
///
/// # Example
///
/// ```no_run
/// use vibecoder_config::VibeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VibeConfig::load()?;
/// println!("Gemini endpoint: {}", config.gemini.base_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct VibeConfig {
    /// Gemini settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Static context settings
    #[serde(default)]
    pub context: ContextConfig,
    /// Drive proxy settings
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Credential store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl VibeConfig {
    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VibeResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VibeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VibeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load bundled defaults merged with user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file exists but is malformed.
    #[instrument]
    pub fn load() -> VibeResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vibecoder/vibecoder.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vibecoder").required(false));

        builder
            .build()
            .map_err(|e| {
                VibeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VibeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse the bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> VibeResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                VibeError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let bundled = VibeConfig::bundled().expect("bundled config parses");
        let defaults = GeminiConfig::default();
        assert_eq!(bundled.gemini.base_url, defaults.base_url);
        assert_eq!(bundled.gemini.top_k, 40);
        assert_eq!(bundled.gemini.max_output_tokens, 8192);
        assert_eq!(bundled.gemini.idea_model, "gemini-2.0-flash");
        assert_eq!(bundled.context.helper_source, "gemini-helper.gs");
    }

    #[test]
    fn model_override_wins_over_builtin() {
        let mut gemini = GeminiConfig::default();
        assert_eq!(
            gemini.provider_model(ModelChoice::GeminiFlash),
            "gemini-1.5-flash"
        );
        gemini
            .models
            .insert("gemini-flash".to_string(), "gemini-2.0-flash".to_string());
        assert_eq!(
            gemini.provider_model(ModelChoice::GeminiFlash),
            "gemini-2.0-flash"
        );
        assert_eq!(
            gemini.provider_model(ModelChoice::GeminiPro),
            "gemini-1.5-pro"
        );
    }

    #[test]
    fn default_model_used_when_none_requested() {
        let mut gemini = GeminiConfig::default();
        assert_eq!(gemini.choose_model(None), ModelChoice::default());
        gemini.default_model = ModelChoice::Gemini25Flash;
        assert_eq!(gemini.choose_model(None), ModelChoice::Gemini25Flash);
        assert_eq!(
            gemini.choose_model(Some("gemini-flash")),
            ModelChoice::GeminiFlash
        );
        assert_eq!(
            gemini.choose_model(Some("no-such-model")),
            ModelChoice::default()
        );
    }

    #[test]
    fn remote_context_source_detected() {
        let mut context = ContextConfig::default();
        assert!(!context.is_remote());
        context.source = "https://example.com/static".to_string();
        assert!(context.is_remote());
    }

    #[test]
    fn explicit_store_dir_is_used() {
        let store = StoreConfig {
            dir: Some(PathBuf::from("/tmp/vibe")),
        };
        assert_eq!(store.resolve_dir(), PathBuf::from("/tmp/vibe"));
    }
}
