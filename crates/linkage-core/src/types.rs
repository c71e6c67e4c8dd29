//! Core data structures for resource documents and mapping outcomes
//!
//! Wire-shape types serialize directly to the resource document format:
//! `{id, type, links, attributes, relationships, meta}` per resource, with
//! relationship objects carrying `{links, data}`.

use crate::error::Severity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Uniquely addresses one resource: `{type, id}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// Top-level links block of a resource document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Links block of a relationship object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub related: String,
}

/// Linkage data of a relationship object
///
/// To-one linkage is `null` when the relation is unset. To-many linkage
/// only appears on relationships declared eager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    ToOne(Option<ResourceIdentifier>),
    ToMany(Vec<ResourceIdentifier>),
}

/// One named relationship of a resource document
///
/// Lazy to-many relationships expose only `links`; the `data` key is absent
/// entirely, not null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipObject {
    pub links: RelationshipLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Linkage>,
}

/// The wire representation of one domain object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub links: DocumentLinks,
    pub attributes: Map<String, Value>,
    pub relationships: BTreeMap<String, RelationshipObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResourceDocument {
    /// The identifier pair of this document
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.resource_type.clone(), self.id.clone())
    }
}

/// Singular and plural resource names for a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePair {
    pub singular: String,
    pub plural: String,
}

/// Classification of a recovered per-field failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCode {
    /// A declared value kind has no defined coercion
    UnsupportedType,
    /// The field has no usable accessor for the requested direction
    MissingAccessor,
    /// The document names a field the target type does not declare
    UnknownField,
    /// A relationship entry carries no linkage identifier
    MissingLinkage,
    /// A related type was never registered
    UnregisteredType,
    /// A related value's identifier could not be resolved
    MissingIdentifier,
    /// A raw value did not fit the declared kind
    Coercion,
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCode::UnsupportedType => write!(f, "UnsupportedType"),
            IssueCode::MissingAccessor => write!(f, "MissingAccessor"),
            IssueCode::UnknownField => write!(f, "UnknownField"),
            IssueCode::MissingLinkage => write!(f, "MissingLinkage"),
            IssueCode::UnregisteredType => write!(f, "UnregisteredType"),
            IssueCode::MissingIdentifier => write!(f, "MissingIdentifier"),
            IssueCode::Coercion => write!(f, "Coercion"),
        }
    }
}

/// One recovered per-field failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldIssue {
    pub code: IssueCode,
    /// Field path within the document, e.g. `attributes.title`
    pub path: String,
    pub message: String,
    pub severity: Severity,
    /// The offending value, when one was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Aggregated per-field outcomes of one mapping call
///
/// The engine never silently swallows a recovered field failure: every
/// omitted or skipped field lands here for the caller to inspect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueReport {
    pub items: Vec<FieldIssue>,
    pub max_severity: Option<Severity>,
    pub summary: IssueSummary,
}

/// Count statistics over an issue report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueSummary {
    pub total_items: usize,
    pub by_code: HashMap<String, usize>,
}

impl IssueReport {
    pub fn is_clean(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.max_severity >= Some(Severity::Error)
    }
}

/// Result of serializing one instance into a resource document
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub document: ResourceDocument,
    pub issues: IssueReport,
}

/// Result of hydrating a resource document into an instance
#[derive(Debug, Clone)]
pub struct ReadOutcome<T> {
    pub resource: T,
    pub issues: IssueReport,
}
