//! Field classification
//!
//! Partitions a type's declared fields into {identifier, meta, attributes,
//! belongs-to, has-many} under a profile. Pure function of the descriptor
//! and profile; the registry memoizes the result per (type, profile).
//!
//! Copyright (c) 2025 Linkage Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::schema::descriptor::{
    FieldDescriptor, NameOverride, TypeDescriptor, TypeShape, ValueKind,
};
use crate::schema::profile::Profile;

/// Semantic role a field ends up with after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Identifier,
    Meta,
    Attribute,
    BelongsTo,
    HasMany,
}

/// Immutable per-type classification
///
/// Every declared field lands in exactly one category or is excluded
/// (unreadable or ignored). Safe to share across threads once built.
#[derive(Debug, Clone)]
pub struct TypeClassification {
    pub type_name: &'static str,
    pub shape: TypeShape,
    pub name_override: Option<NameOverride>,
    pub identifier: Option<FieldDescriptor>,
    pub meta: Option<FieldDescriptor>,
    pub attributes: Vec<FieldDescriptor>,
    pub belongs_to: Vec<FieldDescriptor>,
    pub has_many: Vec<FieldDescriptor>,
}

impl TypeClassification {
    /// Look up a declared field by name, with the role it classified into
    pub fn role_of(&self, name: &str) -> Option<(FieldRole, &FieldDescriptor)> {
        if let Some(f) = self.identifier.as_ref().filter(|f| f.name == name) {
            return Some((FieldRole::Identifier, f));
        }
        if let Some(f) = self.meta.as_ref().filter(|f| f.name == name) {
            return Some((FieldRole::Meta, f));
        }
        if let Some(f) = self.attributes.iter().find(|f| f.name == name) {
            return Some((FieldRole::Attribute, f));
        }
        if let Some(f) = self.belongs_to.iter().find(|f| f.name == name) {
            return Some((FieldRole::BelongsTo, f));
        }
        if let Some(f) = self.has_many.iter().find(|f| f.name == name) {
            return Some((FieldRole::HasMany, f));
        }
        None
    }
}

/// Reserved field name that routes to the document's `meta` block
const META_FIELD: &str = "meta";

/// Classify a descriptor's fields under a profile.
///
/// Fails only when the descriptor itself is malformed — a relationship
/// field without a declared target type — never for ordinary data.
pub fn classify(descriptor: &TypeDescriptor, profile: &Profile) -> Result<TypeClassification> {
    let mut classification = TypeClassification {
        type_name: descriptor.type_name,
        shape: descriptor.shape,
        name_override: descriptor.name_override,
        identifier: None,
        meta: None,
        attributes: Vec::new(),
        belongs_to: Vec::new(),
        has_many: Vec::new(),
    };

    for field in &descriptor.fields {
        // Must be readable
        if !field.readable {
            continue;
        }

        // Explicitly excluded
        if field.ignored {
            continue;
        }

        // Identifier; with several candidates the last one examined wins
        if field.has_marker_in(profile.identifier_markers()) {
            classification.identifier = Some(field.clone());
            continue;
        }

        // Meta, by reserved name
        if field.name == META_FIELD {
            classification.meta = Some(field.clone());
            continue;
        }

        // hasMany
        if field.has_marker_in(profile.has_many_markers()) {
            if field.related.is_none() {
                return Err(Error::UnsupportedType {
                    field: field.name.to_string(),
                    message: format!(
                        "to-many field on '{}' declares no element type",
                        descriptor.type_name
                    ),
                });
            }
            classification.has_many.push(field.clone());
            continue;
        }

        // belongsTo, explicit marker or enumerated value kind
        if field.has_marker_in(profile.belongs_to_markers()) || field.kind == ValueKind::Constant {
            if field.related.is_none() {
                return Err(Error::UnsupportedType {
                    field: field.name.to_string(),
                    message: format!(
                        "to-one field on '{}' declares no related type",
                        descriptor.type_name
                    ),
                });
            }
            classification.belongs_to.push(field.clone());
            continue;
        }

        // attributes
        classification.attributes.push(field.clone());
    }

    Ok(classification)
}
