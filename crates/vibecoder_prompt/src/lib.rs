//! Prompt construction and response processing for VibeCoder.
//!
//! - [`build_system_prompt`] layers fixed rules with optional static context.
//! - [`split_response`] separates model output into code and explanation.
//! - [`append_helper`] merges the helper library into generated code once.
//! - [`prepare_code_for_display`] and [`highlight`] back code viewers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod display;
mod extraction;
mod highlight;
mod refine;
mod splitter;

pub use assembler::build_system_prompt;
pub use display::{prepare_code_for_display, DisplayedCode};
pub use extraction::extract_json;
pub use highlight::{highlight, Span, SpanKind};
pub use refine::build_refine_prompt;
pub use splitter::{append_helper, process_response, split_response, SplitResponse, HELPER_MARKER};
