//! Scripted Gemini driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use vibecoder_core::{GenerationRequest, GenerationResult};
use vibecoder_interface::ScriptDriver;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always reply with this raw model text
    Reply(String),
    /// Always fail with this message
    Fail(String),
}

/// Mock driver that records prompts and can hold replies until released.
pub struct MockGemini {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockGemini {
    /// Mock that replies with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Mock that fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(message.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Hold every reply until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Number of generate calls so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptDriver for MockGemini {
    async fn generate(&self, req: &GenerationRequest, _api_key: &str) -> GenerationResult {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.behavior {
            MockBehavior::Reply(text) => {
                let (code, explanation) = vibecoder_prompt::split_response(text).into_parts();
                GenerationResult::success(text.clone(), code, explanation, 5)
            }
            MockBehavior::Fail(message) => GenerationResult::failure(message.clone(), 5),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }
}
