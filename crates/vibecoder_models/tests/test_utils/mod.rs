//! Test utilities for VibeCoder model tests.
//!
//! This module provides mock implementations and test helpers.

pub mod mock_gemini;

#[allow(unused_imports)]
pub use mock_gemini::{MockBehavior, MockGemini};

use vibecoder_core::{GenerationOptions, GenerationRequest};

/// Helper to create a test request using the builder pattern.
#[allow(dead_code)]
pub fn create_test_request(prompt: &str, include_helper: bool) -> GenerationRequest {
    GenerationRequest::builder()
        .prompt(prompt)
        .options(GenerationOptions::new(include_helper, false))
        .build()
        .expect("Failed to build test request")
}
