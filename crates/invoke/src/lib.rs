//! Top-level facade crate for the invocation envelope.
//!
//! Re-exports the core envelope types and the HTTP bridge so users can depend on a single crate.

pub mod core {
    pub use invoke_core::*;
}

pub mod bridge {
    pub use invoke_bridge::*;
}

pub use invoke_core::{InvokeError, InvokeMethodRequest, Result};
