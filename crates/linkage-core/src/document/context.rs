//! Mapping context: the configuration surface of one mapping call
//!
//! Copyright (c) 2025 Linkage Team
//! Licensed under the Apache-2.0 license

use crate::naming::{self, PathCase};
use crate::schema::profile::Profile;
use crate::schema::NameOverride;
use crate::types::NamePair;

/// Configuration carried through a write or read call
#[derive(Debug, Clone)]
pub struct MapContext {
    /// Marker sets recognized during classification
    pub profile: Profile,
    /// Root URL prefix for document links
    pub namespace: String,
    /// Casing convention for path segments and document keys
    pub path_case: PathCase,
}

impl MapContext {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            namespace: "/jsonapi".to_string(),
            path_case: PathCase::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_path_case(mut self, path_case: PathCase) -> Self {
        self.path_case = path_case;
        self
    }

    /// Format a declared field name into a document key
    pub(crate) fn format_key(&self, field_name: &str) -> String {
        naming::to_path_case(field_name, self.path_case)
    }

    /// Convert a document key back into a declared field name
    pub(crate) fn property_name(&self, key: &str) -> String {
        naming::to_property_name(key, self.path_case)
    }

    /// Resolve the resource names of a type
    pub(crate) fn names_for(
        &self,
        type_name: &str,
        name_override: Option<&NameOverride>,
    ) -> NamePair {
        naming::resource_name(type_name, name_override, self.path_case)
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
