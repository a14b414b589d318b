//! Mock Gemini backend for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use vibecoder_core::{GenerationRequest, GenerationResult, IdeaChip, StreamEvent};
use vibecoder_error::{IdeaError, IdeaErrorKind, VibeResult};
use vibecoder_interface::{EventStream, IdeaSource, KeyVerification, ScriptDriver, Streaming};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always reply with this raw model text
    Reply(String),
    /// Always fail with this message
    Fail(String),
}

/// Mock Gemini backend that counts calls.
pub struct MockGemini {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockGemini {
    /// Mock that always replies with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScriptDriver for MockGemini {
    async fn generate(&self, _req: &GenerationRequest, _api_key: &str) -> GenerationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        match &self.behavior {
            MockBehavior::Reply(text) => {
                let split = vibecoder_prompt::split_response(text);
                let (code, explanation) = split.into_parts();
                GenerationResult::success(text.clone(), code, explanation, 1)
            }
            MockBehavior::Fail(message) => GenerationResult::failure(message.clone(), 1),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }
}

#[async_trait]
impl Streaming for MockGemini {
    async fn generate_stream(&self, _req: &GenerationRequest, _api_key: &str) -> EventStream {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let events = match &self.behavior {
            MockBehavior::Reply(text) => {
                let mut events: Vec<StreamEvent> = text
                    .as_bytes()
                    .chunks(8)
                    .enumerate()
                    .map(|(i, chunk)| {
                        StreamEvent::delta(String::from_utf8_lossy(chunk), i as u64)
                    })
                    .collect();
                events.push(StreamEvent::finished(events.len() as u64));
                events
            }
            MockBehavior::Fail(message) => vec![StreamEvent::failed(message.clone(), 0)],
        };
        Box::pin(futures_util::stream::iter(events))
    }
}

#[async_trait]
impl IdeaSource for MockGemini {
    async fn fetch_ideas(&self, _api_key: &str) -> VibeResult<Vec<IdeaChip>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(vibecoder_models::parse_ideas(text)?),
            MockBehavior::Fail(message) => Err(IdeaError::new(IdeaErrorKind::Parse(message.clone())).into()),
        }
    }
}

#[async_trait]
impl KeyVerification for MockGemini {
    async fn verify_key(&self, api_key: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        matches!(self.behavior, MockBehavior::Reply(_)) && !api_key.is_empty()
    }
}
