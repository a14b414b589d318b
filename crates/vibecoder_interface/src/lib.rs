//! Trait definitions for the VibeCoder script generation pipeline.
//!
//! The session controller and the CLI depend on these seams rather than on
//! the concrete Gemini and Drive clients, so tests can drive them with mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    DrivePublisher, EventStream, IdeaSource, KeyVerification, NoopEffects, ScriptDriver,
    ScriptNaming, Streaming, TurnEffects,
};
