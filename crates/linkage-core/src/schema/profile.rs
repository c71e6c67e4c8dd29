//! Marker profiles
//!
//! A profile is data, not code: three sets of marker identifiers deciding
//! which declared markers mean "identifier", "belongs to", and "has many".
//! Different object-mapping ecosystems supply different sets; the engine
//! itself only ever asks set-membership questions.

use serde::{Deserialize, Serialize};

/// Field markers recognized by profiles
///
/// `ResourceId`, `BelongsTo`, and `HasMany` are the bespoke markers;
/// the rest mirror the relation markers of relational mapping layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    ResourceId,
    PrimaryKey,
    BelongsTo,
    HasMany,
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

/// The set of markers a classification run recognizes for each role
///
/// The `name` doubles as the classification cache key, so two distinct
/// profiles must not share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    identifier_markers: Vec<Marker>,
    belongs_to_markers: Vec<Marker>,
    has_many_markers: Vec<Marker>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        identifier_markers: Vec<Marker>,
        belongs_to_markers: Vec<Marker>,
        has_many_markers: Vec<Marker>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier_markers,
            belongs_to_markers,
            has_many_markers,
        }
    }

    /// Bespoke markers only: `ResourceId`/`PrimaryKey` identify, `BelongsTo`
    /// and `HasMany` relate. Relational markers are ignored.
    pub fn standard() -> Self {
        Self::new(
            "standard",
            vec![Marker::ResourceId, Marker::PrimaryKey],
            vec![Marker::BelongsTo],
            vec![Marker::HasMany],
        )
    }

    /// Relational mapping flavor: `ManyToOne`/`OneToOne` read as belongs-to,
    /// `OneToMany`/`ManyToMany` as has-many, alongside the bespoke markers.
    ///
    /// The marker sets are deliberately disjoint. For custom profiles that
    /// overlap, the has-many check runs before the belongs-to check, so a
    /// field carrying a marker from both sets classifies as has-many.
    pub fn relational() -> Self {
        Self::new(
            "relational",
            vec![Marker::ResourceId, Marker::PrimaryKey],
            vec![Marker::BelongsTo, Marker::ManyToOne, Marker::OneToOne],
            vec![Marker::HasMany, Marker::OneToMany, Marker::ManyToMany],
        )
    }

    /// Stable name, used as the classification cache key component
    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn identifier_markers(&self) -> &[Marker] {
        &self.identifier_markers
    }

    pub fn belongs_to_markers(&self) -> &[Marker] {
        &self.belongs_to_markers
    }

    pub fn has_many_markers(&self) -> &[Marker] {
        &self.has_many_markers
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::standard()
    }
}
