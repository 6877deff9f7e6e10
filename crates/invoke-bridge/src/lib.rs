//! invoke bridge: HTTP-side adapters around the invocation envelope.
//!
//! `inbound` turns an HTTP request into an `InvokeMethodRequest`, `outbound`
//! turns an envelope back into the HTTP request delivered to the app, and
//! `config` holds the strictly parsed settings both sides use.

pub mod config;
pub mod inbound;
pub mod outbound;
