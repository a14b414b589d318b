//! Loading the three static context resources.

use crate::{ContextSource, DirectorySource, HttpSource};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use vibecoder_config::ContextConfig;
use vibecoder_error::VibeResult;

/// Auxiliary text interpolated into system prompts.
///
/// `loaded` distinguishes "fetched and empty" from "never fetched".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StaticContext {
    /// Helper library source appended to generated code
    helper_source: String,
    /// Helper library usage contract and reference docs
    helper_docs: String,
    /// Sample-code corpus
    sample_code: String,
    /// Whether a load has succeeded
    loaded: bool,
}

impl StaticContext {
    /// A loaded context with the given contents.
    pub fn new(
        helper_source: impl Into<String>,
        helper_docs: impl Into<String>,
        sample_code: impl Into<String>,
    ) -> Self {
        Self {
            helper_source: helper_source.into(),
            helper_docs: helper_docs.into(),
            sample_code: sample_code.into(),
            loaded: true,
        }
    }

    /// The unloaded placeholder used when nothing could be fetched.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Relative paths of the three resources.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ContextPaths {
    helper_source: String,
    helper_docs: String,
    sample_code: String,
}

impl ContextPaths {
    /// Create a path set.
    pub fn new(
        helper_source: impl Into<String>,
        helper_docs: impl Into<String>,
        sample_code: impl Into<String>,
    ) -> Self {
        Self {
            helper_source: helper_source.into(),
            helper_docs: helper_docs.into(),
            sample_code: sample_code.into(),
        }
    }
}

impl From<&ContextConfig> for ContextPaths {
    fn from(config: &ContextConfig) -> Self {
        Self::new(
            config.helper_source.clone(),
            config.helper_docs.clone(),
            config.sample_code.clone(),
        )
    }
}

/// Fetches the three resources from one source.
#[derive(Clone)]
pub struct ContextLoader {
    source: Arc<dyn ContextSource>,
    paths: ContextPaths,
}

impl std::fmt::Debug for ContextLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextLoader")
            .field("source", &self.source.describe())
            .field("paths", &self.paths)
            .finish()
    }
}

impl ContextLoader {
    /// Create a loader over an arbitrary source.
    pub fn new(source: Arc<dyn ContextSource>, paths: ContextPaths) -> Self {
        Self { source, paths }
    }

    /// Build a loader from configuration.
    ///
    /// An `http://` or `https://` source is fetched over the network,
    /// anything else is treated as a directory resolved by
    /// [`ContextConfig::local_dir`].
    pub fn from_config(config: &ContextConfig) -> Self {
        let source: Arc<dyn ContextSource> = if config.is_remote() {
            info!(url = %config.source, "Using remote static context");
            Arc::new(HttpSource::new(config.source.clone()))
        } else {
            let dir = config.local_dir();
            if dir.is_dir() {
                info!(dir = %dir.display(), "Using static context directory");
            } else {
                warn!(
                    dir = %dir.display(),
                    "Static context directory not found; prompts will omit helper and samples"
                );
            }
            Arc::new(DirectorySource::new(dir))
        };
        Self::new(source, ContextPaths::from(config))
    }

    /// Fetch all three resources concurrently.
    ///
    /// # Errors
    ///
    /// Fails as a whole if any single resource fails; no partial context is returned.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn load(&self) -> VibeResult<StaticContext> {
        debug!("Loading static context");
        let (helper_source, helper_docs, sample_code) = tokio::try_join!(
            self.source.fetch(&self.paths.helper_source),
            self.source.fetch(&self.paths.helper_docs),
            self.source.fetch(&self.paths.sample_code),
        )?;

        info!(
            helper_source_bytes = helper_source.len(),
            helper_docs_bytes = helper_docs.len(),
            sample_code_bytes = sample_code.len(),
            "Static context loaded"
        );
        Ok(StaticContext::new(helper_source, helper_docs, sample_code))
    }
}
