//! Places static context resources can be read from.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};
use vibecoder_error::{ContextError, ContextErrorKind};

/// A location that serves static context resources by relative path.
#[async_trait]
pub trait ContextSource: Send + Sync {
    /// Read one resource as text.
    async fn fetch(&self, resource: &str) -> Result<String, ContextError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// Resources served over HTTP(S) under a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContextSource for HttpSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch(&self, resource: &str) -> Result<String, ContextError> {
        let url = self.url_for(resource);
        let response = self.client.get(&url).send().await.map_err(|e| {
            ContextError::new(ContextErrorKind::Transport {
                resource: resource.to_string(),
                message: e.to_string(),
            })
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContextError::new(ContextErrorKind::Fetch {
                resource: resource.to_string(),
                status_code: status.as_u16(),
            }));
        }

        let text = response.text().await.map_err(|e| {
            ContextError::new(ContextErrorKind::Transport {
                resource: resource.to_string(),
                message: e.to_string(),
            })
        })?;
        debug!(bytes = text.len(), "Fetched context resource");
        Ok(text)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Resources read from a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContextSource for DirectorySource {
    async fn fetch(&self, resource: &str) -> Result<String, ContextError> {
        let path = self.root.join(resource);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                ContextErrorKind::Fetch {
                    resource: resource.to_string(),
                    status_code: 404,
                }
            } else {
                ContextErrorKind::Transport {
                    resource: resource.to_string(),
                    message: e.to_string(),
                }
            };
            ContextError::new(kind)
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let source = HttpSource::new("https://example.test/context/");
        assert_eq!(
            source.url_for("/gemini-helper.gs"),
            "https://example.test/context/gemini-helper.gs"
        );
    }
}
