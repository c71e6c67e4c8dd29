//! Declarative schema layer: descriptors, profiles, classification, registry
//!
//! Types participate in document mapping by publishing a [`TypeDescriptor`]
//! through the [`Resource`] trait and registering it (lazily on first use,
//! or eagerly at startup via [`Registry::register`]). Classification under a
//! [`Profile`] partitions the declared fields into the five document roles.

pub mod classifier;
pub mod descriptor;
pub mod profile;
pub mod registry;

pub use classifier::{classify, FieldRole, TypeClassification};
pub use descriptor::{FieldDescriptor, NameOverride, TypeDescriptor, TypeDescriptorBuilder, TypeShape, ValueKind};
pub use profile::{Marker, Profile};
pub use registry::{Registry, RegistryEntry};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capability trait for types that map to and from resource documents.
///
/// `Serialize` gives the writer shallow access to field values,
/// `DeserializeOwned + Default` lets the reader hydrate a blank instance,
/// and the descriptor carries everything classification needs. Relationship
/// targets named in a descriptor must themselves be registered before
/// linkage can be resolved against them.
pub trait Resource: Serialize + DeserializeOwned + Default {
    /// The declared schema of this type
    fn descriptor() -> TypeDescriptor;
}
