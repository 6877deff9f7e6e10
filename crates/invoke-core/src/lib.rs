//! invoke core: the method invocation envelope and its builder.
//!
//! This crate owns the envelope schema exchanged between caller and callee
//! nodes, plus the rules used while assembling it: metadata normalization,
//! HTTP verb/query string handling and content type negotiation. It carries
//! no transport dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. The only fallible
//! operation is wrapping a foreign envelope without a payload; lenient inputs
//! (unknown verbs, malformed query segments) are normalized instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metadata;
pub mod protocol;
pub mod query;
pub mod request;

/// Shared result type.
pub use error::{ErrorCode, InvokeError, Result};
pub use request::{InvokeMethodRequest, JSON_CONTENT_TYPE};
