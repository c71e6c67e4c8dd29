//! Document serialization
//!
//! Turns an instance of a registered resource type into a resource document.
//! The document is assembled fully in memory, so a call either succeeds with
//! a complete document or fails before any output exists. Failures scoped to
//! a single field are recovered: the field is omitted and reported in the
//! returned issue list.
//!
//! Copyright (c) 2025 Linkage Team
//! Licensed under the Apache-2.0 license

use crate::document::context::MapContext;
use crate::document::issues::IssueTracker;
use crate::error::{Error, Result};
use crate::schema::{Registry, Resource, TypeShape};
use crate::types::{
    DocumentLinks, IssueCode, Linkage, NamePair, RelationshipLinks, RelationshipObject,
    ResourceDocument, ResourceIdentifier, WriteOutcome,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Serialize one instance into a resource document.
///
/// The type is registered lazily on first use; relationship targets named in
/// its descriptor must be registered by the caller before their linkage can
/// be resolved. Structural failures on the primary object (no identifier,
/// no usable serialized form) are fatal; per-field failures are recovered
/// into the outcome's issue report.
pub fn write<T: Resource>(object: &T, context: &MapContext) -> Result<WriteOutcome> {
    let registry = Registry::global();
    let key = registry.register::<T>();
    let classification = registry.classification_for(key, &context.profile)?;
    let mut tracker = IssueTracker::new();

    let value = serde_json::to_value(object)?;
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    // Identifier: constant types use the constant's name, struct types the
    // value of the classified identifier field.
    let id_text = match classification.shape {
        TypeShape::Constant => match &value {
            Value::String(name) => name.clone(),
            other => {
                return Err(Error::Classification {
                    type_name: key.to_string(),
                    message: format!("constant value did not serialize to text: {}", other),
                    source: None,
                })
            }
        },
        TypeShape::Struct => {
            let field = classification.identifier.as_ref().ok_or_else(|| {
                Error::Classification {
                    type_name: key.to_string(),
                    message: "no field classified as the identifier".to_string(),
                    source: None,
                }
            })?;
            let raw = obj.get(field.name).ok_or_else(|| Error::Classification {
                type_name: key.to_string(),
                message: format!("identifier field '{}' absent from serialized value", field.name),
                source: None,
            })?;
            value_text(raw)
        }
    };

    let names = context.names_for(key, classification.name_override.as_ref());
    let self_link = format!("{}/{}/{}", context.namespace, names.plural, id_text);

    // Attributes: values pass through unconverted, only keys are formatted
    let mut attributes = Map::new();
    for field in &classification.attributes {
        let doc_key = context.format_key(field.name);
        match obj.get(field.name) {
            Some(v) => {
                attributes.insert(doc_key, v.clone());
            }
            None => tracker.add(
                IssueCode::MissingAccessor,
                &format!("attributes.{}", doc_key),
                "value absent from serialized instance",
                None,
            ),
        }
    }

    let mut relationships = BTreeMap::new();

    // hasMany: navigable links only; linkage data only for eager fields
    for field in &classification.has_many {
        let element_key = match field.related {
            Some(k) => k,
            None => continue,
        };
        let rel_names = names_for_key(element_key, context, registry);
        let rel_key = context.format_key(field.name);
        let links = relationship_links(context, &names, &id_text, &rel_names.plural);

        let data = if field.lazy {
            None
        } else {
            match obj.get(field.name) {
                Some(Value::Array(items)) => {
                    let mut identifiers = Vec::with_capacity(items.len());
                    for (index, item) in items.iter().enumerate() {
                        match resolve_linkage(item, element_key, context, registry) {
                            Ok(Some(identifier)) => identifiers.push(identifier),
                            Ok(None) => {}
                            Err((code, message)) => tracker.add(
                                code,
                                &format!("relationships.{}[{}]", rel_key, index),
                                &message,
                                Some(item.clone()),
                            ),
                        }
                    }
                    Some(Linkage::ToMany(identifiers))
                }
                Some(Value::Null) => Some(Linkage::ToMany(Vec::new())),
                Some(other) => {
                    tracker.add(
                        IssueCode::Coercion,
                        &format!("relationships.{}", rel_key),
                        "eager collection value is not an array",
                        Some(other.clone()),
                    );
                    None
                }
                None => {
                    tracker.add(
                        IssueCode::MissingAccessor,
                        &format!("relationships.{}", rel_key),
                        "value absent from serialized instance",
                        None,
                    );
                    None
                }
            }
        };

        relationships.insert(rel_key, RelationshipObject { links, data });
    }

    // belongsTo: links use the related type's singular segment, linkage
    // data its plural
    for field in &classification.belongs_to {
        let related_key = match field.related {
            Some(k) => k,
            None => continue,
        };
        let rel_names = names_for_key(related_key, context, registry);
        let rel_key = context.format_key(field.name);
        let links = relationship_links(context, &names, &id_text, &rel_names.singular);

        match obj.get(field.name) {
            Some(v) => match resolve_linkage(v, related_key, context, registry) {
                Ok(linkage) => {
                    relationships.insert(
                        rel_key,
                        RelationshipObject {
                            links,
                            data: Some(Linkage::ToOne(linkage)),
                        },
                    );
                }
                Err((code, message)) => tracker.add(
                    code,
                    &format!("relationships.{}", rel_key),
                    &message,
                    Some(v.clone()),
                ),
            },
            None => tracker.add(
                IssueCode::MissingAccessor,
                &format!("relationships.{}", rel_key),
                "value absent from serialized instance",
                None,
            ),
        }
    }

    // Meta passes through raw
    let meta = classification
        .meta
        .as_ref()
        .and_then(|f| obj.get(f.name))
        .cloned();

    let document = ResourceDocument {
        id: id_text,
        resource_type: names.plural,
        links: DocumentLinks { self_link },
        attributes,
        relationships,
        meta,
    };

    Ok(WriteOutcome {
        document,
        issues: tracker.build_report(),
    })
}

fn relationship_links(
    context: &MapContext,
    names: &NamePair,
    id_text: &str,
    segment: &str,
) -> RelationshipLinks {
    RelationshipLinks {
        self_link: format!(
            "{}/{}/{}/relationships/{}",
            context.namespace, names.plural, id_text, segment
        ),
        related: format!("{}/{}/{}/{}", context.namespace, names.plural, id_text, segment),
    }
}

/// Resource names of a related type: registered overrides apply, otherwise
/// the names derive structurally from the type key
fn names_for_key(key: &str, context: &MapContext, registry: &Registry) -> NamePair {
    let name_override = registry.entry(key).and_then(|e| e.descriptor.name_override);
    context.names_for(key, name_override.as_ref())
}

/// Resolve one related value into linkage, using the related type's own
/// classification to find its identifier. Enum constants carry their name
/// as the identifier directly.
fn resolve_linkage(
    value: &Value,
    related_key: &str,
    context: &MapContext,
    registry: &Registry,
) -> std::result::Result<Option<ResourceIdentifier>, (IssueCode, String)> {
    let names = names_for_key(related_key, context, registry);
    match value {
        Value::Null => Ok(None),
        Value::String(constant) => Ok(Some(ResourceIdentifier::new(names.plural, constant.clone()))),
        Value::Object(map) => {
            let classification = registry
                .classification_for(related_key, &context.profile)
                .map_err(|e| (IssueCode::UnregisteredType, e.to_string()))?;
            let id_field = classification.identifier.as_ref().ok_or_else(|| {
                (
                    IssueCode::MissingIdentifier,
                    format!("'{}' declares no identifier field", related_key),
                )
            })?;
            let raw = map.get(id_field.name).ok_or_else(|| {
                (
                    IssueCode::MissingIdentifier,
                    format!("identifier field '{}' absent from related value", id_field.name),
                )
            })?;
            Ok(Some(ResourceIdentifier::new(names.plural, value_text(raw))))
        }
        other => Err((
            IssueCode::Coercion,
            format!("related value does not look like an entity: {}", other),
        )),
    }
}

/// Textual rendering of an identifier value
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
