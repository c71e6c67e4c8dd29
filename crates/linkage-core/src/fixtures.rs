//! Shared fixture types for unit tests
//!
//! All fixtures register against the global registry; registration is
//! idempotent so every test can call [`register_fixtures`] up front.

use crate::schema::{Registry, Resource, TypeDescriptor, ValueKind};
use chrono::{DateTime, Utc};
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

impl Article {
    pub fn sample() -> Self {
        Self {
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
}

/// Exercises the explicit resource-name override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Human {
    pub id: i64,
}

impl Resource for Human {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder("Human")
            .resource_name("person", "people")
            .identifier("id", ValueKind::Long)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
}

impl Resource for Track {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder("Track")
            .identifier("id", ValueKind::Long)
            .attribute("title", ValueKind::Text)
            .build()
    }
}

/// Exercises an eager to-many collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub tracks: Vec<Track>,
}

impl Resource for Playlist {
    fn descriptor() -> TypeDescriptor {
        use crate::schema::{FieldDescriptor, Marker};
        TypeDescriptor::builder("Playlist")
            .identifier("id", ValueKind::Long)
            .field(
                FieldDescriptor::new("tracks", ValueKind::Collection)
                    .marked(Marker::HasMany)
                    .related_to("Track")
                    .eager(),
            )
            .build()
    }
}

/// Exercises the epoch-milliseconds timestamp coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub occurred_at: DateTime<Utc>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: 0,
            occurred_at: DateTime::UNIX_EPOCH,
        }
    }
}

impl Resource for Event {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder("Event")
            .identifier("id", ValueKind::Long)
            .attribute("occurred_at", ValueKind::Timestamp)
            .build()
    }
}

pub fn register_fixtures() {
    let registry = Registry::global();
    registry.register::<PublishState>();
    registry.register::<Person>();
    registry.register::<Comment>();
    registry.register::<Article>();
    registry.register::<Human>();
    registry.register::<Track>();
    registry.register::<Playlist>();
    registry.register::<Event>();
}
