//! Linkage Core - Declarative mapping between domain objects and resource documents
//!
//! This crate maps in-memory domain objects to and from a standardized
//! hypermedia resource document format (`id`, `type`, `attributes`,
//! `relationships`, `links`, `meta`), driven by declarative per-field
//! metadata rather than hand-written mapping code.
//!
//! # Main Components
//!
//! - **Schema Layer**: type descriptors, marker profiles, field
//!   classification, and the process-wide registry
//! - **Document Engine**: serialize instances into resource documents and
//!   hydrate documents back into instances, with per-field issue reporting
//! - **Naming**: path-case conversion and English pluralization with
//!   per-type overrides
//! - **Envelope**: builder for the final `{jsonapi, data, included, meta}`
//!   payload
//!
//! # Example
//!
//! ```no_run
//! use linkage_core::{read, write, MapContext, Resource, TypeDescriptor, ValueKind};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Article {
//!     id: i64,
//!     title: String,
//! }
//!
//! impl Resource for Article {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::builder("Article")
//!             .identifier("id", ValueKind::Long)
//!             .attribute("title", ValueKind::Text)
//!             .build()
//!     }
//! }
//!
//! fn example() -> linkage_core::Result<()> {
//!     let context = MapContext::default();
//!     let outcome = write(&Article { id: 42, title: "Hi".into() }, &context)?;
//!     let document = serde_json::json!({"data": serde_json::to_value(&outcome.document)?});
//!     let roundtrip = read::<Article>(&document, &context)?;
//!     assert_eq!(roundtrip.resource.title, "Hi");
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod naming;
pub mod schema;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export main types for convenience
pub use document::{read, write, Envelope, EnvelopeBuilder, MapContext, PrimaryData, VersionMarker};
pub use error::{Error, Result, Severity};
pub use naming::PathCase;
pub use schema::{
    classify, FieldDescriptor, FieldRole, Marker, NameOverride, Profile, Registry, Resource,
    TypeClassification, TypeDescriptor, TypeShape, ValueKind,
};
pub use types::{
    DocumentLinks, FieldIssue, IssueCode, IssueReport, IssueSummary, Linkage, NamePair,
    ReadOutcome, RelationshipLinks, RelationshipObject, ResourceDocument, ResourceIdentifier,
    WriteOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
