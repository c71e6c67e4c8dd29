//! Document hydration
//!
//! Populates a blank instance of a registered resource type from a resource
//! document. Relationship linkage produces intentionally partial stub
//! instances carrying only their identifier; full hydration of related
//! resources is the caller's responsibility. Failures scoped to one field
//! are recovered and reported, never fatal to sibling fields.
//!
//! Copyright (c) 2025 Linkage Team
//! Licensed under the Apache-2.0 license

use crate::document::context::MapContext;
use crate::document::issues::IssueTracker;
use crate::error::{Error, Result};
use crate::schema::{Registry, Resource, TypeShape, ValueKind};
use crate::types::{IssueCode, ReadOutcome};
use serde_json::{Map, Value};

/// Hydrate a resource document into a fresh instance.
///
/// Expects the `{data: {attributes, relationships}}` envelope of a single
/// resource. Fails with a hydration error when the `data` object is absent
/// or the final value does not fit the target type; everything scoped to a
/// single field lands in the outcome's issue report instead.
pub fn read<T: Resource>(document: &Value, context: &MapContext) -> Result<ReadOutcome<T>> {
    let registry = Registry::global();
    let key = registry.register::<T>();
    let classification = registry.classification_for(key, &context.profile)?;

    if classification.shape == TypeShape::Constant {
        return Err(Error::Hydration {
            message: format!("constant type '{}' cannot be hydrated", key),
            source: None,
        });
    }

    let data = document
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::Hydration {
            message: "document has no data object".to_string(),
            source: None,
        })?;

    let blank = serde_json::to_value(T::default()).map_err(|e| Error::Instantiation {
        type_name: key.to_string(),
        message: "blank instance did not serialize".to_string(),
        source: Some(e.into()),
    })?;
    let mut base = match blank {
        Value::Object(map) => map,
        other => {
            return Err(Error::Hydration {
                message: format!("blank instance did not serialize to an object: {}", other),
                source: None,
            })
        }
    };

    let mut tracker = IssueTracker::new();

    // Attributes: keys are converted back to the declared convention and
    // values coerced to the declared kind
    if let Some(attributes) = data.get("attributes").and_then(Value::as_object) {
        for (doc_key, raw) in attributes {
            let path = format!("attributes.{}", doc_key);
            let property = context.property_name(doc_key);
            let field = match classification.role_of(&property) {
                Some((_, field)) => field,
                None => {
                    tracker.add(
                        IssueCode::UnknownField,
                        &path,
                        "target type declares no such field",
                        Some(raw.clone()),
                    );
                    continue;
                }
            };
            if !field.writable {
                tracker.add(IssueCode::MissingAccessor, &path, "field is not writable", None);
                continue;
            }
            match coerce(raw, field.kind) {
                Ok(candidate) => {
                    if let Err(message) = try_assign::<T>(&mut base, field.name, candidate) {
                        tracker.add(IssueCode::Coercion, &path, &message, Some(raw.clone()));
                    }
                }
                Err((code, message)) => tracker.add(code, &path, &message, Some(raw.clone())),
            }
        }
    }

    // Relationships: enum constants parse from the linkage id directly,
    // entity fields become identifier-only stubs
    if let Some(relationships) = data.get("relationships").and_then(Value::as_object) {
        for (doc_key, raw) in relationships {
            let path = format!("relationships.{}", doc_key);
            let property = context.property_name(doc_key);
            let field = match classification.role_of(&property) {
                Some((_, field)) => field,
                None => {
                    tracker.add(
                        IssueCode::UnknownField,
                        &path,
                        "target type declares no such field",
                        Some(raw.clone()),
                    );
                    continue;
                }
            };
            if !field.writable {
                tracker.add(IssueCode::MissingAccessor, &path, "field is not writable", None);
                continue;
            }

            let id_text = match raw.get("data").and_then(|d| d.get("id")) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => {
                    tracker.add(
                        IssueCode::MissingLinkage,
                        &path,
                        "relationship carries no linkage identifier",
                        Some(raw.clone()),
                    );
                    continue;
                }
            };

            match field.kind {
                ValueKind::Constant => {
                    if let Err(message) =
                        try_assign::<T>(&mut base, field.name, Value::String(id_text.clone()))
                    {
                        tracker.add(
                            IssueCode::Coercion,
                            &path,
                            &format!("no such constant '{}': {}", id_text, message),
                            Some(raw.clone()),
                        );
                    }
                }
                ValueKind::Entity => {
                    match build_stub(field.related, &id_text, context, registry) {
                        Ok(stub) => {
                            if let Err(message) = try_assign::<T>(&mut base, field.name, stub) {
                                tracker.add(IssueCode::Coercion, &path, &message, Some(raw.clone()));
                            }
                        }
                        Err((code, message)) => tracker.add(code, &path, &message, None),
                    }
                }
                _ => tracker.add(
                    IssueCode::UnsupportedType,
                    &path,
                    "relationship targets a field that is not to-one",
                    None,
                ),
            }
        }
    }

    let resource = serde_json::from_value::<T>(Value::Object(base)).map_err(|e| Error::Hydration {
        message: "hydrated value does not fit the target type".to_string(),
        source: Some(e.into()),
    })?;

    Ok(ReadOutcome {
        resource,
        issues: tracker.build_report(),
    })
}

/// Insert a candidate value and verify the working object still
/// deserializes into the target type; revert on failure. Every accepted
/// assignment keeps the working value hydratable, so one bad field can
/// never poison the final conversion.
fn try_assign<T: Resource>(
    base: &mut Map<String, Value>,
    field_name: &str,
    candidate: Value,
) -> std::result::Result<(), String> {
    let previous = base.insert(field_name.to_string(), candidate);
    match serde_json::from_value::<T>(Value::Object(base.clone())) {
        Ok(_) => Ok(()),
        Err(e) => {
            match previous {
                Some(p) => {
                    base.insert(field_name.to_string(), p);
                }
                None => {
                    base.remove(field_name);
                }
            }
            Err(e.to_string())
        }
    }
}

/// Construct an identifier-only stub value of a registered related type
fn build_stub(
    related: Option<&'static str>,
    id_text: &str,
    context: &MapContext,
    registry: &Registry,
) -> std::result::Result<Value, (IssueCode, String)> {
    let related_key = related.ok_or_else(|| {
        (
            IssueCode::UnsupportedType,
            "relationship field declares no related type".to_string(),
        )
    })?;
    let entry = registry.entry(related_key).ok_or_else(|| {
        (
            IssueCode::UnregisteredType,
            format!("cannot instantiate a stub: '{}' is not registered", related_key),
        )
    })?;
    let classification = registry
        .classification_for(related_key, &context.profile)
        .map_err(|e| (IssueCode::UnregisteredType, e.to_string()))?;
    let id_field = classification.identifier.as_ref().ok_or_else(|| {
        (
            IssueCode::MissingIdentifier,
            format!("'{}' declares no identifier field", related_key),
        )
    })?;

    let mut stub = match entry.blank_value() {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err((
                IssueCode::UnregisteredType,
                format!("blank '{}' did not serialize to an object: {}", related_key, other),
            ))
        }
        Err(e) => return Err((IssueCode::UnregisteredType, e.to_string())),
    };

    // Linkage ids parse as 64-bit integers when possible, else stay text
    let id_value = match id_text.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(id_text.to_string()),
    };
    stub.insert(id_field.name.to_string(), id_value);

    Ok(Value::Object(stub))
}

/// Coerce a raw document value to a declared attribute kind.
///
/// Null always passes through (it resets optional fields); everything else
/// follows the supported coercion set: text, 64-bit integer, 32-bit
/// integer, double, boolean, epoch-milliseconds timestamp.
fn coerce(raw: &Value, kind: ValueKind) -> std::result::Result<Value, (IssueCode, String)> {
    if raw.is_null() {
        return Ok(Value::Null);
    }
    match kind {
        ValueKind::Text => match raw {
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            _ => Err((
                IssueCode::Coercion,
                "value cannot be rendered as text".to_string(),
            )),
        },
        ValueKind::Long => integer_of(raw)
            .map(Value::from)
            .ok_or_else(|| (IssueCode::Coercion, "expected a 64-bit integer".to_string())),
        ValueKind::Int => match integer_of(raw) {
            Some(n) if i32::try_from(n).is_ok() => Ok(Value::from(n)),
            Some(_) => Err((
                IssueCode::Coercion,
                "value exceeds the 32-bit integer range".to_string(),
            )),
            None => Err((IssueCode::Coercion, "expected a 32-bit integer".to_string())),
        },
        ValueKind::Double => raw
            .as_f64()
            .or_else(|| raw.as_str().and_then(|s| s.parse::<f64>().ok()))
            .map(Value::from)
            .ok_or_else(|| (IssueCode::Coercion, "expected a double".to_string())),
        ValueKind::Boolean => raw
            .as_bool()
            .or_else(|| raw.as_str().and_then(|s| s.parse::<bool>().ok()))
            .map(Value::from)
            .ok_or_else(|| (IssueCode::Coercion, "expected a boolean".to_string())),
        ValueKind::Timestamp => integer_of(raw)
            .filter(|n| chrono::DateTime::from_timestamp_millis(*n).is_some())
            .map(Value::from)
            .ok_or_else(|| {
                (
                    IssueCode::Coercion,
                    "expected an epoch-milliseconds timestamp".to_string(),
                )
            }),
        ValueKind::Json
        | ValueKind::Constant
        | ValueKind::Entity
        | ValueKind::Collection => Err((
            IssueCode::UnsupportedType,
            format!("no attribute coercion defined for {:?}", kind),
        )),
    }
}

fn integer_of(raw: &Value) -> Option<i64> {
    raw.as_i64()
        .or_else(|| raw.as_str().and_then(|s| s.parse::<i64>().ok()))
}
