//! Caller-facing invoke payload.

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Opaque payload bytes with an optional schema type hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Any {
    /// Schema type hint. Empty for raw (untyped) payloads.
    #[serde(default)]
    pub type_url: String,
    /// Payload bytes (zero-copy).
    #[serde(default)]
    pub value: Bytes,
}

impl Any {
    /// Raw payload without a type hint.
    pub fn raw(value: impl Into<Bytes>) -> Self {
        Self {
            type_url: String::new(),
            value: value.into(),
        }
    }
}

/// HTTP verb carried by the HTTP extension (closed set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    #[default]
    None,
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
}

impl Verb {
    /// Every member, in schema order.
    pub const ALL: [Verb; 9] = [
        Verb::None,
        Verb::Get,
        Verb::Head,
        Verb::Post,
        Verb::Put,
        Verb::Delete,
        Verb::Connect,
        Verb::Options,
        Verb::Trace,
    ];

    /// Schema name of the verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::None => "NONE",
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Connect => "CONNECT",
            Verb::Options => "OPTIONS",
            Verb::Trace => "TRACE",
        }
    }

    /// Exact (case-sensitive) lookup by schema name.
    pub fn from_name(name: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|v| v.as_str() == name)
    }

    /// Case-insensitive lookup; unknown names fall back to [`DEFAULT_VERB`].
    pub fn parse_lenient(name: &str) -> Verb {
        match Verb::from_name(&name.to_uppercase()) {
            Some(v) => v,
            None => {
                tracing::debug!(verb = name, fallback = DEFAULT_VERB.as_str(), "unknown http verb");
                DEFAULT_VERB
            }
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb substituted for unrecognized verb strings.
pub const DEFAULT_VERB: Verb = Verb::Post;

/// HTTP semantics for invocations coming from HTTP-style callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpExtension {
    pub verb: Verb,
    /// Single-valued query parameters.
    #[serde(default)]
    pub querystring: HashMap<String, String>,
}

/// Invoke payload: method, content type, data and HTTP extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeRequest {
    /// Target operation name.
    pub method: String,
    #[serde(default)]
    pub data: Option<Any>,
    /// May be empty until negotiated.
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub http_extension: Option<HttpExtension>,
}

impl InvokeRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }
}
