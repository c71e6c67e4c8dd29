//! Declarative type descriptors
//!
//! A descriptor is the schema a type publishes about itself: its declared
//! field names, value kinds, relationship markers, and naming overrides.
//! Descriptors replace runtime field inspection — classification is computed
//! from this data alone, so the engine never needs a reflection facility.
//!
//! Copyright (c) 2025 Linkage Team
//! Licensed under the Apache-2.0 license

use crate::schema::profile::Marker;

/// Semantic kind of a declared field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// UTF-8 text
    Text,
    /// 64-bit integer
    Long,
    /// 32-bit integer
    Int,
    /// 64-bit float
    Double,
    Boolean,
    /// Epoch-milliseconds timestamp (`chrono::serde::ts_milliseconds` on the field)
    Timestamp,
    /// Arbitrary nested JSON, passed through unconverted on write
    Json,
    /// An enumerated constant type; serializes as a to-one relationship
    Constant,
    /// A to-one related entity
    Entity,
    /// A to-many collection of related entities
    Collection,
}

/// Explicit `{singular, plural}` resource-name override for a type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameOverride {
    pub singular: Option<&'static str>,
    pub plural: Option<&'static str>,
}

/// Declared metadata for one field of a resource type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared name in the type's own convention (snake_case)
    pub name: &'static str,
    pub kind: ValueKind,
    /// Markers consulted against the active profile during classification
    pub markers: Vec<Marker>,
    /// Type key of the related entity (to-one) or collection element (to-many)
    pub related: Option<&'static str>,
    /// Excluded from classification entirely
    pub ignored: bool,
    /// Lazy to-many collections describe themselves with links only
    pub lazy: bool,
    pub readable: bool,
    pub writable: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            markers: Vec::new(),
            related: None,
            ignored: false,
            lazy: true,
            readable: true,
            writable: true,
        }
    }

    /// Attach a classification marker
    pub fn marked(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Name the related type (to-one) or element type (to-many)
    pub fn related_to(mut self, type_key: &'static str) -> Self {
        self.related = Some(type_key);
        self
    }

    /// Exclude this field from documents in both directions
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Describe this to-many collection eagerly, with linkage data
    pub fn eager(mut self) -> Self {
        self.lazy = false;
        self
    }

    /// The field can be serialized but never hydrated
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// The field can be hydrated but never serialized
    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    pub fn has_marker_in(&self, set: &[Marker]) -> bool {
        self.markers.iter().any(|m| set.contains(m))
    }
}

/// Whether a type is an ordinary field-bearing struct or an enumerated
/// constant type whose identifier is the constant's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    Struct,
    Constant,
}

/// The complete declared schema of one resource type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Simple type name in the declared convention (UpperCamel), also the
    /// registry key relationship descriptors refer to
    pub type_name: &'static str,
    pub shape: TypeShape,
    pub name_override: Option<NameOverride>,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn builder(type_name: &'static str) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            type_name,
            name_override: None,
            fields: Vec::new(),
        }
    }

    /// Descriptor for an enumerated constant type
    pub fn constant(type_name: &'static str) -> Self {
        Self {
            type_name,
            shape: TypeShape::Constant,
            name_override: None,
            fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builder for struct-shaped type descriptors
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    type_name: &'static str,
    name_override: Option<NameOverride>,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Add a fully configured field
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add the identifier field
    pub fn identifier(self, name: &'static str, kind: ValueKind) -> Self {
        self.field(FieldDescriptor::new(name, kind).marked(Marker::ResourceId))
    }

    /// Add a plain attribute field
    pub fn attribute(self, name: &'static str, kind: ValueKind) -> Self {
        self.field(FieldDescriptor::new(name, kind))
    }

    /// Add an enum-typed field; classified as belongs-to without a marker
    pub fn constant_field(self, name: &'static str, enum_type: &'static str) -> Self {
        self.field(FieldDescriptor::new(name, ValueKind::Constant).related_to(enum_type))
    }

    /// Add a to-one relationship field
    pub fn belongs_to(self, name: &'static str, related: &'static str) -> Self {
        self.field(
            FieldDescriptor::new(name, ValueKind::Entity)
                .marked(Marker::BelongsTo)
                .related_to(related),
        )
    }

    /// Add a to-many relationship field
    pub fn has_many(self, name: &'static str, element: &'static str) -> Self {
        self.field(
            FieldDescriptor::new(name, ValueKind::Collection)
                .marked(Marker::HasMany)
                .related_to(element),
        )
    }

    /// Add the meta field (assigned by its reserved name)
    pub fn meta(self) -> Self {
        self.field(FieldDescriptor::new("meta", ValueKind::Json))
    }

    /// Override both resource names
    pub fn resource_name(mut self, singular: &'static str, plural: &'static str) -> Self {
        self.name_override = Some(NameOverride {
            singular: Some(singular),
            plural: Some(plural),
        });
        self
    }

    /// Override only the plural resource name
    pub fn plural_name(mut self, plural: &'static str) -> Self {
        let current = self.name_override.unwrap_or_default();
        self.name_override = Some(NameOverride {
            plural: Some(plural),
            ..current
        });
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            type_name: self.type_name,
            shape: TypeShape::Struct,
            name_override: self.name_override,
            fields: self.fields,
        }
    }
}
