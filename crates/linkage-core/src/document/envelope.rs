//! Response envelope
//!
//! Wraps primary data, side-loaded documents, and top-level meta into the
//! final payload: `{jsonapi: {version: 1}, data, included, meta}`. The
//! builder is the only way to obtain an envelope, and it is seeded with the
//! primary data, so `data` can never be unset.

use crate::types::{ResourceDocument, ResourceIdentifier};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Fixed version marker emitted at the top level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMarker {
    pub version: u32,
}

impl Default for VersionMarker {
    fn default() -> Self {
        Self { version: 1 }
    }
}

/// Primary data of an envelope: one document or a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Single(Box<ResourceDocument>),
    Collection(Vec<ResourceDocument>),
}

impl From<ResourceDocument> for PrimaryData {
    fn from(document: ResourceDocument) -> Self {
        PrimaryData::Single(Box::new(document))
    }
}

impl From<Vec<ResourceDocument>> for PrimaryData {
    fn from(documents: Vec<ResourceDocument>) -> Self {
        PrimaryData::Collection(documents)
    }
}

/// The complete response payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub jsonapi: VersionMarker,
    pub data: PrimaryData,
    pub included: Vec<ResourceDocument>,
    pub meta: Map<String, Value>,
}

impl Envelope {
    pub fn builder(data: impl Into<PrimaryData>) -> EnvelopeBuilder {
        EnvelopeBuilder {
            data: data.into(),
            included: Vec::new(),
            seen: HashSet::new(),
            meta: Map::new(),
        }
    }
}

/// Builder for [`Envelope`]
#[derive(Debug)]
pub struct EnvelopeBuilder {
    data: PrimaryData,
    included: Vec<ResourceDocument>,
    seen: HashSet<ResourceIdentifier>,
    meta: Map<String, Value>,
}

impl EnvelopeBuilder {
    /// Side-load a document; duplicates by `(type, id)` are dropped
    pub fn include(mut self, document: ResourceDocument) -> Self {
        if self.seen.insert(document.identifier()) {
            self.included.push(document);
        }
        self
    }

    /// Side-load several documents
    pub fn include_all(self, documents: impl IntoIterator<Item = ResourceDocument>) -> Self {
        documents.into_iter().fold(self, |b, d| b.include(d))
    }

    /// Add one top-level meta entry
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Merge a block of top-level meta entries
    pub fn merge_meta(mut self, entries: Map<String, Value>) -> Self {
        self.meta.extend(entries);
        self
    }

    pub fn build(self) -> Envelope {
        Envelope {
            jsonapi: VersionMarker::default(),
            data: self.data,
            included: self.included,
            meta: self.meta,
        }
    }
}
