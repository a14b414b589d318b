//! Generation request types.

use crate::ModelChoice;
use serde::{Deserialize, Serialize};

/// Toggles that control which static context goes into the system prompt.
///
/// Both default to `true`, matching a fresh credential store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GenerationOptions {
    /// Interpolate the helper library contract and append the helper source
    include_helper: bool,
    /// Interpolate the sample-code corpus
    include_sample_code: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_helper: true,
            include_sample_code: true,
        }
    }
}

impl GenerationOptions {
    /// Create options with explicit toggles.
    pub fn new(include_helper: bool, include_sample_code: bool) -> Self {
        Self {
            include_helper,
            include_sample_code,
        }
    }
}

/// One generation request, immutable once sent.
///
/// The `sequence` number is issued by the session controller and lets it
/// discard results that arrive after a newer request was made.
///
/// # Examples
///
/// ```
/// use vibecoder_core::{GenerationRequest, GenerationOptions, ModelChoice};
///
/// let request = GenerationRequest::builder()
///     .prompt("Email every row in Sheet1")
///     .model(ModelChoice::GeminiFlash)
///     .options(GenerationOptions::new(false, true))
///     .sequence(3u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Email every row in Sheet1");
/// assert_eq!(*request.sequence(), 3);
/// assert!(!*request.options().include_helper());
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
#[builder(setter(into))]
pub struct GenerationRequest {
    /// The user's description or refinement prompt
    prompt: String,
    /// Selected model
    #[builder(default)]
    model: ModelChoice,
    /// Context toggles
    #[builder(default)]
    options: GenerationOptions,
    /// Monotonic request number within a session
    #[builder(default)]
    sequence: u64,
}

impl GenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Create a request with every field given.
    pub fn new(
        prompt: impl Into<String>,
        model: ModelChoice,
        options: GenerationOptions,
        sequence: u64,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            options,
            sequence,
        }
    }
}
