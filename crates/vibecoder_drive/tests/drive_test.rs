//! Local validation performed before any proxy call.

use vibecoder_core::{PublishRequest, ScriptUpload};
use vibecoder_drive::DriveProxyClient;
use vibecoder_error::{DriveErrorKind, VibeErrorKind};
use vibecoder_interface::DrivePublisher;

fn drive_kind(err: vibecoder_error::VibeError) -> Option<DriveErrorKind> {
    match err.kind() {
        VibeErrorKind::Drive(e) => Some(e.kind.clone()),
        _ => None,
    }
}

// An unroutable proxy address; these tests must fail before any request.
const NOWHERE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn test_save_without_token_is_rejected_locally() -> anyhow::Result<()> {
    let client = DriveProxyClient::new(NOWHERE)?;
    let upload = ScriptUpload::builder()
        .script_content("function main() {}")
        .access_token("")
        .build()?;

    let err = client.create_script(&upload).await.unwrap_err();
    assert_eq!(drive_kind(err), Some(DriveErrorKind::MissingToken));
    Ok(())
}

#[tokio::test]
async fn test_save_without_content_is_rejected_locally() -> anyhow::Result<()> {
    let client = DriveProxyClient::new(NOWHERE)?;
    let upload = ScriptUpload::builder()
        .script_content("  ")
        .access_token("ya29.token")
        .build()?;

    let err = client.create_script(&upload).await.unwrap_err();
    assert_eq!(
        drive_kind(err),
        Some(DriveErrorKind::MissingScript("content".into()))
    );
    Ok(())
}

#[tokio::test]
async fn test_publish_without_script_id_is_rejected_locally() -> anyhow::Result<()> {
    let client = DriveProxyClient::new(NOWHERE)?;
    let request = PublishRequest::builder()
        .script_id("")
        .access_token("ya29.token")
        .build()?;

    let err = client.publish_script(&request).await.unwrap_err();
    assert_eq!(drive_kind(err), Some(DriveErrorKind::MissingScript("id".into())));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_proxy_is_a_transport_error() -> anyhow::Result<()> {
    let client = DriveProxyClient::new(NOWHERE)?;
    let upload = ScriptUpload::builder()
        .script_content("function main() {}")
        .access_token("ya29.token")
        .build()?;

    let err = client.create_script(&upload).await.unwrap_err();
    assert!(matches!(drive_kind(err), Some(DriveErrorKind::Transport(_))));
    Ok(())
}
