//! In-memory Drive proxy.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use vibecoder_core::{PublishRequest, PublishedScript, SavedScript, ScriptUpload};
use vibecoder_error::VibeResult;
use vibecoder_interface::DrivePublisher;

/// Counts create and publish calls and answers with fixed ids.
#[derive(Default)]
pub struct MockDrive {
    creates: AtomicUsize,
    publishes: AtomicUsize,
}

#[allow(dead_code)]
impl MockDrive {
    /// Number of create calls.
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    /// Number of publish calls.
    pub fn publishes(&self) -> usize {
        self.publishes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DrivePublisher for MockDrive {
    async fn create_script(&self, upload: &ScriptUpload) -> VibeResult<SavedScript> {
        let n = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SavedScript::new(
            format!("file-{n}"),
            format!("https://drive.google.com/file/d/file-{n}/view"),
            upload.file_name().clone(),
        ))
    }

    async fn publish_script(&self, request: &PublishRequest) -> VibeResult<PublishedScript> {
        let n = self.publishes.fetch_add(1, Ordering::SeqCst) as u64 + 1;
        Ok(PublishedScript::new(
            format!("deploy-{}", request.script_id()),
            n,
            None,
        ))
    }
}
