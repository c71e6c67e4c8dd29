//! Name formatting between declared identifiers and wire path segments
//!
//! Type names arrive in the declared UpperCamel convention and field names
//! in snake_case; both are converted to the configured path case before they
//! reach a document. Pluralization applies to type names only.

pub mod pluralize;

use crate::schema::NameOverride;
use crate::types::NamePair;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// Casing convention for path segments and document keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathCase {
    /// lower-hyphenated, the wire default
    #[default]
    Kebab,
    Snake,
    Camel,
}

impl PathCase {
    fn case(self) -> Case {
        match self {
            PathCase::Kebab => Case::Kebab,
            PathCase::Snake => Case::Snake,
            PathCase::Camel => Case::Camel,
        }
    }
}

/// Convert a declared identifier (type or field name) to the path case
pub fn to_path_case(identifier: &str, path_case: PathCase) -> String {
    identifier.to_case(path_case.case())
}

/// Convert a document key back to the declared snake_case field convention
pub fn to_property_name(key: &str, path_case: PathCase) -> String {
    key.from_case(path_case.case()).to_case(Case::Snake)
}

/// Resolve the `{singular, plural}` pair for a type name.
///
/// Defaults are derived structurally; an explicit override replaces the
/// corresponding default unconditionally, with no merging between the two.
pub fn resource_name(
    type_name: &str,
    name_override: Option<&NameOverride>,
    path_case: PathCase,
) -> NamePair {
    let singular = name_override
        .and_then(|o| o.singular)
        .map(str::to_string)
        .unwrap_or_else(|| to_path_case(type_name, path_case));
    let plural = name_override
        .and_then(|o| o.plural)
        .map(str::to_string)
        .unwrap_or_else(|| pluralize::plural(&singular));
    NamePair { singular, plural }
}
