//! Trait definitions for model backends and session side effects.

use async_trait::async_trait;
use futures_util::stream::Stream;
use std::pin::Pin;
use vibecoder_core::{
    GenerationRequest, GenerationResult, IdeaChip, PublishRequest, PublishedScript, SavedScript,
    ScriptUpload, StreamEvent,
};
use vibecoder_error::{EffectError, VibeResult};

/// A finite stream of generation events ending in one final event.
pub type EventStream = Pin<Box<dyn Stream<Item = StreamEvent> + Send>>;

/// Core trait every script-generating backend implements.
///
/// Implementations never fail at the type level: transport, HTTP and content
/// errors are folded into a failed [`GenerationResult`].
#[async_trait]
pub trait ScriptDriver: Send + Sync {
    /// Generate a script for the request using the given API key.
    async fn generate(&self, req: &GenerationRequest, api_key: &str) -> GenerationResult;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Backends that can stream generated text as it arrives.
#[async_trait]
pub trait Streaming: ScriptDriver {
    /// Start a streamed generation.
    ///
    /// The stream terminates at provider end-of-stream or at the first error
    /// and cannot be restarted.
    async fn generate_stream(&self, req: &GenerationRequest, api_key: &str) -> EventStream;
}

/// Backends that can check whether an API key is usable.
#[async_trait]
pub trait KeyVerification: Send + Sync {
    /// True iff the provider accepts the key and lists at least one model.
    async fn verify_key(&self, api_key: &str) -> bool;
}

/// Sources of example prompts.
#[async_trait]
pub trait IdeaSource: Send + Sync {
    /// Fetch at most five ideas.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response has the wrong shape.
    /// Callers are expected to fall back to `vibecoder_core::fallback_ideas`.
    async fn fetch_ideas(&self, api_key: &str) -> VibeResult<Vec<IdeaChip>>;
}

/// Backends that can suggest a file name for a script.
#[async_trait]
pub trait ScriptNaming: Send + Sync {
    /// Suggest a short name for a script described by `description`.
    ///
    /// Never fails; implementations fall back to a name derived from the description.
    async fn suggest_script_name(&self, description: &str, api_key: &str) -> String;
}

/// Best-effort side effects run when a generation succeeds.
pub trait TurnEffects: Send + Sync {
    /// Celebrate a successful generation.
    fn celebrate(&self);

    /// Copy generated code to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is available. Callers log and ignore it.
    fn copy_to_clipboard(&self, text: &str) -> Result<(), EffectError>;
}

/// Effects that do nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEffects;

impl TurnEffects for NoopEffects {
    fn celebrate(&self) {}

    fn copy_to_clipboard(&self, _text: &str) -> Result<(), EffectError> {
        Ok(())
    }
}

/// Save and publish scripts through the Drive / Apps Script proxy.
#[async_trait]
pub trait DrivePublisher: Send + Sync {
    /// Create a script file in the user's Drive.
    async fn create_script(&self, upload: &ScriptUpload) -> VibeResult<SavedScript>;

    /// Publish a saved script as a deployment.
    async fn publish_script(&self, request: &PublishRequest) -> VibeResult<PublishedScript>;
}
