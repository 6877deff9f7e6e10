//! `InvokeMethodRequest`: fluent builder over one invocation envelope.
//!
//! The builder owns its `InternalInvokeRequest` exclusively while it is being
//! assembled. Every constructor guarantees that `message` is present, so the
//! accessors below never have to deal with a missing payload.

use bytes::Bytes;

use crate::error::{InvokeError, Result};
use crate::metadata::{self, ListValueCodec, Metadata, MetadataCodec};
use crate::protocol::internal::DEFAULT_API_VERSION;
use crate::protocol::{
    Actor, Any, ApiVersion, HttpExtension, InternalInvokeRequest, InternalMetadata, InvokeRequest,
    Verb,
};
use crate::query;

/// Content type assumed for untyped payloads without an explicit type.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Envelope builder for one outbound or inbound invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeMethodRequest {
    r: InternalInvokeRequest,
}

impl InvokeMethodRequest {
    /// New envelope for `method` with default version and empty metadata.
    pub fn new(method: impl Into<String>) -> Self {
        Self::from_invoke_request(InvokeRequest::new(method))
    }

    /// Wrap an already built payload.
    pub fn from_invoke_request(pb: InvokeRequest) -> Self {
        Self {
            r: InternalInvokeRequest {
                ver: DEFAULT_API_VERSION,
                actor: None,
                metadata: InternalMetadata::new(),
                message: Some(pb),
            },
        }
    }

    /// Wrap a complete envelope received from elsewhere.
    ///
    /// The envelope is moved in unchanged. Fails with
    /// [`InvokeError::MissingPayload`] when it carries no message.
    pub fn from_internal(pb: InternalInvokeRequest) -> Result<Self> {
        if pb.message.is_none() {
            return Err(InvokeError::MissingPayload);
        }
        Ok(Self { r: pb })
    }

    /// Address the invocation to an actor.
    #[must_use]
    pub fn with_actor(mut self, actor_type: impl Into<String>, actor_id: impl Into<String>) -> Self {
        self.r.actor = Some(Actor {
            actor_type: actor_type.into(),
            actor_id: actor_id.into(),
        });
        self
    }

    /// Replace the metadata with `md` (default codec).
    #[must_use]
    pub fn with_metadata(self, md: &Metadata) -> Self {
        self.with_metadata_codec(&ListValueCodec, md)
    }

    /// Replace the metadata with `md`, converted by `codec`.
    #[must_use]
    pub fn with_metadata_codec<C: MetadataCodec + ?Sized>(mut self, codec: &C, md: &Metadata) -> Self {
        if !self.r.metadata.is_empty() {
            tracing::trace!(previous = self.r.metadata.len(), "replacing envelope metadata");
        }
        self.r.metadata = codec.encode(md);
        self
    }

    /// Replace the metadata from a header-like key/value source.
    ///
    /// Each key keeps a single value; a revisited key keeps the last one.
    #[must_use]
    pub fn with_headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let md = metadata::metadata_from_pairs(headers);
        self.with_metadata(&md)
    }

    /// Set the payload bytes and content type.
    ///
    /// An empty `content_type` is replaced by [`JSON_CONTENT_TYPE`].
    #[must_use]
    pub fn with_raw_data(mut self, data: impl Into<Bytes>, content_type: &str) -> Self {
        let content_type = if content_type.is_empty() {
            JSON_CONTENT_TYPE
        } else {
            content_type
        };
        let m = self.message_mut();
        m.content_type = content_type.to_string();
        m.data = Some(Any::raw(data));
        self
    }

    /// Attach the HTTP extension.
    ///
    /// Unknown verbs become POST and malformed query segments are dropped;
    /// neither is reported as an error.
    #[must_use]
    pub fn with_http_extension(mut self, verb: &str, querystring: &str) -> Self {
        let verb = Verb::parse_lenient(verb);
        let querystring = if querystring.is_empty() {
            Default::default()
        } else {
            query::parse_query(querystring)
        };
        self.message_mut().http_extension = Some(HttpExtension { verb, querystring });
        self
    }

    /// Query string rebuilt from the HTTP extension, or `""` when there is none.
    pub fn encode_http_query_string(&self) -> String {
        match self.message().and_then(|m| m.http_extension.as_ref()) {
            Some(ext) if !ext.querystring.is_empty() => query::encode_query(&ext.querystring),
            _ => String::new(),
        }
    }

    pub fn api_version(&self) -> ApiVersion {
        self.r.ver
    }

    pub fn metadata(&self) -> &InternalMetadata {
        &self.r.metadata
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.r.actor.as_ref()
    }

    pub fn message(&self) -> Option<&InvokeRequest> {
        self.r.message.as_ref()
    }

    /// Underlying envelope.
    pub fn proto(&self) -> &InternalInvokeRequest {
        &self.r
    }

    /// Hand the envelope over (e.g. to a transport).
    pub fn into_proto(self) -> InternalInvokeRequest {
        self.r
    }

    /// Effective content type and payload bytes.
    ///
    /// The JSON default is derived on every read: it applies when the stored
    /// content type is empty, the payload has no type hint and data is present.
    /// Without data this returns `("", None)`.
    pub fn raw_data(&self) -> (&str, Option<Bytes>) {
        let Some(data) = self.message().and_then(|m| m.data.as_ref()) else {
            return ("", None);
        };
        let stored = self.message().map_or("", |m| m.content_type.as_str());
        let content_type = if stored.is_empty() && data.type_url.is_empty() {
            JSON_CONTENT_TYPE
        } else {
            stored
        };
        (content_type, Some(data.value.clone()))
    }

    fn message_mut(&mut self) -> &mut InvokeRequest {
        self.r.message.get_or_insert_with(InvokeRequest::default)
    }
}
