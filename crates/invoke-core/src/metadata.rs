//! Metadata normalization (flat multi-valued map <-> internal metadata).
//!
//! The conversion is a pure function behind [`MetadataCodec`] so callers can
//! plug a different representation without touching the builder. The only
//! contract is lossless preservation of every key and every value list.

use std::collections::HashMap;

use crate::protocol::{InternalMetadata, ListStringValue};

/// Flat header-like metadata: name -> ordered values.
pub type Metadata = HashMap<String, Vec<String>>;

/// Pure conversion between flat metadata and the internal representation.
pub trait MetadataCodec {
    fn encode(&self, md: &Metadata) -> InternalMetadata;
    fn decode(&self, internal: &InternalMetadata) -> Metadata;
}

/// Default codec: one `ListStringValue` per key, values kept in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListValueCodec;

impl MetadataCodec for ListValueCodec {
    fn encode(&self, md: &Metadata) -> InternalMetadata {
        md.iter()
            .map(|(k, v)| (k.clone(), ListStringValue { values: v.clone() }))
            .collect()
    }

    fn decode(&self, internal: &InternalMetadata) -> Metadata {
        internal
            .iter()
            .map(|(k, v)| (k.clone(), v.values.clone()))
            .collect()
    }
}

/// Convert flat metadata with the default codec.
pub fn metadata_to_internal_metadata(md: &Metadata) -> InternalMetadata {
    ListValueCodec.encode(md)
}

/// Convert internal metadata back to the flat form with the default codec.
pub fn internal_metadata_to_metadata(internal: &InternalMetadata) -> Metadata {
    ListValueCodec.decode(internal)
}

/// Collapse a key/value source into single-valued metadata.
///
/// A key visited more than once keeps the last value.
pub fn metadata_from_pairs<I, K, V>(pairs: I) -> Metadata
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut md = Metadata::new();
    for (k, v) in pairs {
        md.insert(k.into(), vec![v.into()]);
    }
    md
}
