//! Payloads exchanged with the Drive / Apps Script proxy.

use serde::{Deserialize, Serialize};

/// File name used when the caller does not pick one.
pub const DEFAULT_SCRIPT_FILE_NAME: &str = "GeneratedVibeCoderScript.gs";

/// Deployment description used when the caller does not pick one.
pub const DEFAULT_PUBLISH_DESCRIPTION: &str = "Published via VibeCoder";

/// Request body for creating a script file in Drive.
///
/// # Examples
///
/// ```
/// use vibecoder_core::ScriptUpload;
///
/// let upload = ScriptUpload::builder()
///     .script_content("function main() {}")
///     .access_token("ya29.token")
///     .build()
///     .unwrap();
/// assert_eq!(upload.file_name(), "GeneratedVibeCoderScript.gs");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ScriptUpload {
    /// Script source
    script_content: String,
    /// Google OAuth access token
    access_token: String,
    /// Drive file name
    #[builder(default = "DEFAULT_SCRIPT_FILE_NAME.to_string()")]
    file_name: String,
}

impl ScriptUpload {
    /// Creates a new builder.
    pub fn builder() -> ScriptUploadBuilder {
        ScriptUploadBuilder::default()
    }

    /// Create an upload with every field given.
    pub fn new(
        script_content: impl Into<String>,
        access_token: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            script_content: script_content.into(),
            access_token: access_token.into(),
            file_name: file_name.into(),
        }
    }
}

/// A script file created in Drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct SavedScript {
    /// Drive file id, also the Apps Script project id
    file_id: String,
    /// Link that opens the file in Drive
    web_view_link: String,
    /// File name as stored
    name: String,
}

impl SavedScript {
    /// Create a saved script record.
    pub fn new(
        file_id: impl Into<String>,
        web_view_link: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            file_id: file_id.into(),
            web_view_link: web_view_link.into(),
            name: name.into(),
        }
    }
}

/// Request body for publishing a saved script as a deployment.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct PublishRequest {
    /// Apps Script project id returned by the create call
    script_id: String,
    /// Google OAuth access token
    access_token: String,
    /// Deployment description
    #[builder(default = "DEFAULT_PUBLISH_DESCRIPTION.to_string()")]
    description: String,
}

impl PublishRequest {
    /// Creates a new builder.
    pub fn builder() -> PublishRequestBuilder {
        PublishRequestBuilder::default()
    }

    /// Create a publish request with every field given.
    pub fn new(
        script_id: impl Into<String>,
        access_token: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            script_id: script_id.into(),
            access_token: access_token.into(),
            description: description.into(),
        }
    }
}

/// A published deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct PublishedScript {
    /// Deployment id
    deployment_id: String,
    /// Version number created for the deployment
    version_number: u64,
    /// Web app URL, when the deployment has one
    deployment_url: Option<String>,
}

impl PublishedScript {
    /// Create a published deployment record.
    pub fn new(
        deployment_id: impl Into<String>,
        version_number: u64,
        deployment_url: Option<String>,
    ) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            version_number,
            deployment_url,
        }
    }
}
