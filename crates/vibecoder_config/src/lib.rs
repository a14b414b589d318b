//! Configuration and credential storage for VibeCoder.
//!
//! [`VibeConfig`] holds endpoint and generation settings loaded from TOML with
//! layered overrides. [`CredentialStore`] persists the user's API key and
//! context toggles between runs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod store;

pub use config::{ContextConfig, GeminiConfig, ProxyConfig, StoreConfig, VibeConfig};
pub use store::{mask_api_key, CredentialStore, Settings, SETTINGS_FILE};
