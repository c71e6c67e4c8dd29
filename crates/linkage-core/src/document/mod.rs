//! Document engine: serialization, hydration, and the response envelope
//!
//! This module implements the assembly and consumption of resource
//! documents on top of the schema layer's classifications.

pub mod context;
pub mod envelope;
pub mod issues;
pub mod reader;
pub mod writer;

pub use context::MapContext;
pub use envelope::{Envelope, EnvelopeBuilder, PrimaryData, VersionMarker};
pub use issues::IssueTracker;
pub use reader::read;
pub use writer::write;
