//! Integration tests for document hydration

mod test_support;

use linkage_core::{read, write, Error, IssueCode, Severity};
use serde_json::json;
use test_support::{default_context, register_all, sample_article, Article, PublishState};

#[test]
fn hydrates_attributes_and_relationship_stubs() {
    register_all();
    let document = json!({
        "data": {
            "attributes": {"title": "Hi"},
            "relationships": {"author": {"data": {"id": "7"}}}
        }
    });

    let outcome = read::<Article>(&document, &default_context()).unwrap();
    assert_eq!(outcome.resource.title, "Hi");
    assert_eq!(outcome.resource.author.unwrap().id, 7);
    assert!(outcome.issues.is_clean());
}

#[test]
fn serialized_document_round_trips_attribute_values() {
    register_all();
    let context = default_context();
    let article = sample_article();

    let written = write(&article, &context).unwrap().document;
    let wire = json!({"data": serde_json::to_value(&written).unwrap()});
    let outcome = read::<Article>(&wire, &context).unwrap();

    assert_eq!(outcome.resource.title, article.title);
    assert_eq!(outcome.resource.word_count, article.word_count);
    assert_eq!(outcome.resource.state, article.state);
    // Relationship stubs carry the identifier only
    assert_eq!(outcome.resource.author.unwrap().id, 7);
}

#[test]
fn enum_relationship_assigns_the_constant_directly() {
    register_all();
    let document = json!({
        "data": {"relationships": {"state": {"data": {"id": "Published"}}}}
    });
    let outcome = read::<Article>(&document, &default_context()).unwrap();
    assert_eq!(outcome.resource.state, PublishState::Published);
}

#[test]
fn per_field_failures_are_collected_not_fatal() {
    register_all();
    let document = json!({
        "data": {
            "attributes": {
                "title": "kept",
                "word-count": "not-a-number",
                "mystery": true
            },
            "relationships": {
                "state": {"data": {"id": "NoSuchState"}},
                "author": {"data": null}
            }
        }
    });

    let outcome = read::<Article>(&document, &default_context()).unwrap();
    assert_eq!(outcome.resource.title, "kept");
    assert_eq!(outcome.resource.word_count, 0);
    assert_eq!(outcome.resource.state, PublishState::Draft);
    assert!(outcome.resource.author.is_none());

    let report = &outcome.issues;
    assert_eq!(report.summary.total_items, 4);
    assert_eq!(report.summary.by_code["Coercion"], 2);
    assert_eq!(report.summary.by_code["UnknownField"], 1);
    assert_eq!(report.summary.by_code["MissingLinkage"], 1);
    assert_eq!(report.max_severity, Some(Severity::Error));
}

#[test]
fn missing_data_block_is_a_hydration_error() {
    register_all();
    let document = json!({"meta": {"count": 0}});
    let err = read::<Article>(&document, &default_context()).unwrap_err();
    assert!(matches!(err, Error::Hydration { .. }));
}

#[test]
fn numeric_linkage_id_parses_into_integer_identifier() {
    register_all();
    let document = json!({
        "data": {"relationships": {"author": {"data": {"id": 7}}}}
    });
    let outcome = read::<Article>(&document, &default_context()).unwrap();
    assert_eq!(outcome.resource.author.unwrap().id, 7);
}

#[test]
fn unregistered_stub_type_is_reported() {
    use linkage_core::{Resource, TypeDescriptor, ValueKind};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Mystery {
        id: i64,
    }
    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Holder {
        id: i64,
        mystery: Option<Mystery>,
    }
    impl Resource for Holder {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::builder("Holder")
                .identifier("id", ValueKind::Long)
                .belongs_to("mystery", "Mystery")
                .build()
        }
    }

    let document = json!({
        "data": {"relationships": {"mystery": {"data": {"id": "1"}}}}
    });
    let outcome = read::<Holder>(&document, &default_context()).unwrap();
    assert!(outcome.resource.mystery.is_none());
    assert_eq!(outcome.issues.items[0].code, IssueCode::UnregisteredType);
}
