//! HTTP client for the Drive proxy.

use async_trait::async_trait;
use derive_getters::Getters;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use vibecoder_config::ProxyConfig;
use vibecoder_core::{PublishRequest, PublishedScript, SavedScript, ScriptUpload};
use vibecoder_error::{DriveError, DriveErrorKind, HttpError, VibeResult};
use vibecoder_interface::DrivePublisher;

/// Proxy route that creates a script file in Drive.
pub const CREATE_PATH: &str = "/api/appscript/create";

/// Proxy route that versions and deploys a saved script.
pub const PUBLISH_PATH: &str = "/api/appscript/publish";

/// Client for the Drive / Apps Script proxy.
#[derive(Debug, Clone, Getters)]
pub struct DriveProxyClient {
    #[getter(skip)]
    http: reqwest::Client,
    /// Proxy base URL without trailing slash
    base_url: String,
}

impl DriveProxyClient {
    /// Create a client for the proxy at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be built.
    pub fn new(base_url: impl Into<String>) -> VibeResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build Drive proxy client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Creating Drive proxy client");
        Ok(Self { http, base_url })
    }

    /// Create a client from the `[proxy]` configuration section.
    pub fn from_config(config: &ProxyConfig) -> VibeResult<Self> {
        Self::new(config.base_url.clone())
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, DriveError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| DriveError::new(DriveErrorKind::Transport(e.to_string())))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DriveError::new(DriveErrorKind::Transport(e.to_string())))?;
        interpret_proxy_response(status, &text)
    }
}

/// Interpret a proxy reply.
///
/// A 401 status or a `needsReAuth` flag means the Google token expired. Any
/// other non-success status or `success: false` becomes
/// [`DriveErrorKind::Api`] carrying the proxy's `error` and `details`.
///
/// # Examples
///
/// ```
/// use vibecoder_core::SavedScript;
/// use vibecoder_drive::interpret_proxy_response;
///
/// let body = r#"{"success":true,"fileId":"abc","webViewLink":"https://drive/abc","name":"A.gs"}"#;
/// let saved: SavedScript = interpret_proxy_response(200, body).unwrap();
/// assert_eq!(saved.file_id(), "abc");
///
/// let expired = interpret_proxy_response::<SavedScript>(401, r#"{"success":false}"#).unwrap_err();
/// assert!(expired.needs_reauth());
/// ```
pub fn interpret_proxy_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, DriveError> {
    let value: Option<Value> = serde_json::from_str(body).ok();
    let flag = |key: &str| {
        value
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(Value::as_bool)
    };

    if status == 401 || flag("needsReAuth") == Some(true) {
        return Err(DriveError::new(DriveErrorKind::NeedsReauth));
    }

    let ok_status = (200..300).contains(&status);
    if !ok_status || flag("success") == Some(false) {
        let text = |key: &str| {
            value
                .as_ref()
                .and_then(|v| v.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let mut message = text("error").unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        });
        if let Some(details) = text("details") {
            message = format!("{}: {}", message, details);
        }
        return Err(DriveError::new(DriveErrorKind::Api {
            status_code: status,
            message,
        }));
    }

    let value =
        value.ok_or_else(|| DriveError::new(DriveErrorKind::Transport("invalid JSON reply".into())))?;
    serde_json::from_value(value)
        .map_err(|e| DriveError::new(DriveErrorKind::Transport(format!("unexpected reply: {}", e))))
}

#[async_trait]
impl DrivePublisher for DriveProxyClient {
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name()))]
    async fn create_script(&self, upload: &ScriptUpload) -> VibeResult<SavedScript> {
        if upload.access_token().trim().is_empty() {
            return Err(DriveError::new(DriveErrorKind::MissingToken).into());
        }
        if upload.script_content().trim().is_empty() {
            return Err(DriveError::new(DriveErrorKind::MissingScript("content".into())).into());
        }

        match self.post::<_, SavedScript>(CREATE_PATH, upload).await {
            Ok(saved) => {
                info!(file_id = %saved.file_id(), "Script saved to Drive");
                Ok(saved)
            }
            Err(e) => {
                warn!(error = %e, "Drive save failed");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, request), fields(script_id = %request.script_id()))]
    async fn publish_script(&self, request: &PublishRequest) -> VibeResult<PublishedScript> {
        if request.access_token().trim().is_empty() {
            return Err(DriveError::new(DriveErrorKind::MissingToken).into());
        }
        if request.script_id().trim().is_empty() {
            return Err(DriveError::new(DriveErrorKind::MissingScript("id".into())).into());
        }

        let published = self
            .post::<_, PublishedScript>(PUBLISH_PATH, request)
            .await
            .inspect_err(|e| warn!(error = %e, "Publish failed"))?;
        info!(
            deployment_id = %published.deployment_id(),
            version = published.version_number(),
            "Script published"
        );
        Ok(published)
    }
}
