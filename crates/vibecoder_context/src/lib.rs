//! Static context for VibeCoder prompts.
//!
//! Three auxiliary text resources (helper library source, helper reference
//! docs, sample-code corpus) are fetched once per process into a
//! [`SharedContext`]. Loading is best-effort: prompts degrade to empty
//! placeholders when the resources are unavailable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;
mod shared;
mod source;

pub use loader::{ContextLoader, ContextPaths, StaticContext};
pub use shared::SharedContext;
pub use source::{ContextSource, DirectorySource, HttpSource};
