//! Node-to-node envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::InvokeRequest;

/// Envelope API version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiVersion {
    #[default]
    Unspecified,
    V1,
}

/// Version stamped on newly built envelopes.
pub const DEFAULT_API_VERSION: ApiVersion = ApiVersion::V1;

/// Actor address: (type, id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub actor_type: String,
    pub actor_id: String,
}

/// Ordered list of values for one metadata key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStringValue {
    #[serde(default)]
    pub values: Vec<String>,
}

/// Internal metadata representation (header name -> values).
pub type InternalMetadata = HashMap<String, ListStringValue>;

/// Envelope for one invocation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalInvokeRequest {
    pub ver: ApiVersion,
    #[serde(default)]
    pub actor: Option<Actor>,
    #[serde(default)]
    pub metadata: InternalMetadata,
    /// Payload. Required for a valid envelope.
    #[serde(default)]
    pub message: Option<InvokeRequest>,
}
