//! Drive and Apps Script proxy client for VibeCoder.
//!
//! Saving and publishing go through a small proxy service that holds the
//! Google API plumbing. This crate speaks the proxy's JSON envelope:
//! `{ "success": bool, "error": string?, "details": string?, "needsReAuth": bool? }`
//! plus the payload fields of the operation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;

pub use client::{interpret_proxy_response, DriveProxyClient, CREATE_PATH, PUBLISH_PATH};
