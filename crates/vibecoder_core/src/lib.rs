//! Core data types for the VibeCoder script generation pipeline.
//!
//! This crate provides the types shared by the prompt pipeline, the model
//! client, the session controller and the Drive proxy client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod drive;
mod idea;
mod model;
mod request;
mod result;
mod stream;
mod telemetry;

pub use drive::{
    PublishRequest, PublishRequestBuilder, PublishedScript, SavedScript, ScriptUpload,
    ScriptUploadBuilder, DEFAULT_PUBLISH_DESCRIPTION, DEFAULT_SCRIPT_FILE_NAME,
};
pub use idea::{fallback_ideas, IdeaChip, MAX_IDEAS};
pub use model::ModelChoice;
pub use request::{GenerationOptions, GenerationRequest, GenerationRequestBuilder};
pub use result::GenerationResult;
pub use stream::StreamEvent;
pub use telemetry::{init_telemetry, shutdown_telemetry};
