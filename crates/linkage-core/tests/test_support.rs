//! Shared test support utilities for integration tests
#![allow(dead_code)]

use linkage_core::{MapContext, Registry, Resource, TypeDescriptor, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishState {
    #[default]
    Draft,
    Published,
}

impl Resource for PublishState {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::constant("PublishState")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Resource for Person {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder("Person")
            .identifier("id", ValueKind::Long)
            .attribute("name", ValueKind::Text)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub body: String,
}

impl Resource for Comment {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder("Comment")
            .identifier("id", ValueKind::Long)
            .attribute("body", ValueKind::Text)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub word_count: i64,
    pub state: PublishState,
    pub author: Option<Person>,
    pub comments: Vec<Comment>,
    pub meta: Value,
}

impl Resource for Article {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder("Article")
            .identifier("id", ValueKind::Long)
            .attribute("title", ValueKind::Text)
            .attribute("word_count", ValueKind::Long)
            .constant_field("state", "PublishState")
            .belongs_to("author", "Person")
            .has_many("comments", "Comment")
            .meta()
            .build()
    }
}

/// Register every fixture type against the global registry
pub fn register_all() {
    let registry = Registry::global();
    registry.register::<PublishState>();
    registry.register::<Person>();
    registry.register::<Comment>();
    registry.register::<Article>();
}

/// The concrete scenario used across the serialization tests
pub fn sample_article() -> Article {
    Article {
        id: 42,
        title: "Hi".to_string(),
        word_count: 1,
        state: PublishState::Draft,
        author: Some(Person {
            id: 7,
            name: "Ada".to_string(),
        }),
        comments: vec![
            Comment {
                id: 1,
                body: "first".to_string(),
            },
            Comment {
                id: 2,
                body: "second".to_string(),
            },
        ],
        meta: json!({"revision": 3}),
    }
}

pub fn default_context() -> MapContext {
    MapContext::default()
}
