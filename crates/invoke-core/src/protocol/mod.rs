//! Envelope schema (internal + common messages).
//!
//! These are the plain records exchanged between nodes:
//! - `internal`: the node-to-node envelope (`InternalInvokeRequest`) with
//!   version, actor address and multi-valued metadata.
//! - `common`: the caller-facing payload (`InvokeRequest`) with method,
//!   content type, opaque data and the optional HTTP extension.
//!
//! Wire encoding is not defined here. All types derive serde so that
//! envelopes can be dumped for diagnostics and test vectors.

pub mod common;
pub mod internal;

pub use common::{Any, HttpExtension, InvokeRequest, Verb};
pub use internal::{Actor, ApiVersion, InternalInvokeRequest, InternalMetadata, ListStringValue};
