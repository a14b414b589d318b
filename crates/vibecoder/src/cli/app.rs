//! Shared wiring for command handlers.

use vibecoder::{
    ContextLoader, CredentialStore, GeminiClient, Settings, SharedContext, VibeConfig, VibeResult,
};

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const GOOGLE_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";

/// Configuration, stored settings, and the model client.
#[derive(Debug)]
pub struct App {
    pub config: VibeConfig,
    pub store: CredentialStore,
    pub settings: Settings,
    pub context: SharedContext,
    pub client: GeminiClient,
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl App {
    /// Load configuration and settings and build the client.
    pub fn load() -> VibeResult<Self> {
        let config = VibeConfig::load()?;
        let store = CredentialStore::new(config.store.resolve_dir())?;
        let settings = store.load()?;
        let context = SharedContext::new(ContextLoader::from_config(&config.context));
        let client = GeminiClient::new(config.gemini.clone(), context.clone())?;
        Ok(Self {
            config,
            store,
            settings,
            context,
            client,
        })
    }

    /// Stored API key, falling back to `GEMINI_API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.settings
            .api_key()
            .map(str::to_string)
            .or_else(|| env_value(API_KEY_ENV))
    }

    /// Stored Google access token, falling back to `GOOGLE_ACCESS_TOKEN`.
    pub fn google_token(&self) -> Option<String> {
        self.settings
            .google_access_token()
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| env_value(GOOGLE_TOKEN_ENV))
    }
}
