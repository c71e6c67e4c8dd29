//! Process-wide resource registry
//!
//! The registry replaces ambient reflection-keyed caches with an explicit
//! shared instance: types opt in through [`Resource`](super::Resource), and
//! classifications are computed once per (type, profile) and reused for the
//! life of the process. Concurrent first-time classification of one type is
//! harmless — both callers compute the same immutable value and exactly one
//! is stored.

use crate::error::{Error, Result};
use crate::schema::classifier::{classify, TypeClassification};
use crate::schema::descriptor::TypeDescriptor;
use crate::schema::profile::Profile;
use crate::schema::Resource;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Registered state for one type: its descriptor plus a constructor for a
/// blank instance value, captured monomorphically at registration
pub struct RegistryEntry {
    pub descriptor: TypeDescriptor,
    blank: fn() -> Result<Value>,
}

impl RegistryEntry {
    /// Produce the JSON value of a default-constructed instance
    pub fn blank_value(&self) -> Result<Value> {
        (self.blank)()
    }
}

fn blank_value_of<T: Resource>() -> Result<Value> {
    serde_json::to_value(T::default()).map_err(|e| Error::Instantiation {
        type_name: std::any::type_name::<T>().to_string(),
        message: "blank instance did not serialize".to_string(),
        source: Some(e.into()),
    })
}

/// Descriptor store plus memoized classifications
#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<&'static str, Arc<RegistryEntry>>>,
    classifications: RwLock<HashMap<(String, String), Arc<TypeClassification>>>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance used by the document engine
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Register a type's descriptor. Idempotent: the first registration for
    /// a type key wins and later calls are no-ops. Returns the type key.
    pub fn register<T: Resource>(&self) -> &'static str {
        let descriptor = T::descriptor();
        let key = descriptor.type_name;
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_insert_with(|| {
            debug!(type_name = key, "registering resource descriptor");
            Arc::new(RegistryEntry {
                descriptor,
                blank: blank_value_of::<T>,
            })
        });
        key
    }

    /// Look up a registered type by key
    pub fn entry(&self, key: &str) -> Option<Arc<RegistryEntry>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Classification for a registered type under a profile, memoized
    pub fn classification_for(
        &self,
        key: &str,
        profile: &Profile,
    ) -> Result<Arc<TypeClassification>> {
        {
            let classifications = self
                .classifications
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = classifications.get(&(key.to_string(), profile.key().to_string())) {
                return Ok(Arc::clone(hit));
            }
        }

        let entry = self.entry(key).ok_or_else(|| Error::Classification {
            type_name: key.to_string(),
            message: "type is not registered".to_string(),
            source: None,
        })?;

        let computed = Arc::new(classify(&entry.descriptor, profile)?);

        let mut classifications = self
            .classifications
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race; keep whichever landed first.
        let stored = classifications
            .entry((key.to_string(), profile.key().to_string()))
            .or_insert_with(|| {
                debug!(
                    type_name = key,
                    profile = profile.key(),
                    "classification computed"
                );
                computed
            });
        Ok(Arc::clone(stored))
    }

    /// Register and classify in one step
    pub fn classification<T: Resource>(&self, profile: &Profile) -> Result<Arc<TypeClassification>> {
        let key = self.register::<T>();
        self.classification_for(key, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::descriptor::ValueKind;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Gadget {
        id: i64,
        label: String,
    }

    impl Resource for Gadget {
        fn descriptor() -> TypeDescriptor {
            TypeDescriptor::builder("Gadget")
                .identifier("id", ValueKind::Long)
                .attribute("label", ValueKind::Text)
                .build()
        }
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = Registry::new();
        assert_eq!(registry.register::<Gadget>(), "Gadget");
        assert_eq!(registry.register::<Gadget>(), "Gadget");
        assert!(registry.entry("Gadget").is_some());
    }

    #[test]
    fn test_classification_is_cached_per_profile() {
        let registry = Registry::new();
        let profile = Profile::standard();
        let first = registry.classification::<Gadget>(&profile).unwrap();
        let second = registry.classification::<Gadget>(&profile).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let relational = registry
            .classification::<Gadget>(&Profile::relational())
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &relational));
    }

    #[test]
    fn test_unregistered_type_fails_classification() {
        let registry = Registry::new();
        let err = registry
            .classification_for("Nowhere", &Profile::standard())
            .unwrap_err();
        assert!(matches!(err, Error::Classification { .. }));
    }

    #[test]
    fn test_blank_value_reflects_defaults() {
        let registry = Registry::new();
        registry.register::<Gadget>();
        let blank = registry.entry("Gadget").unwrap().blank_value().unwrap();
        assert_eq!(blank["id"], serde_json::json!(0));
        assert_eq!(blank["label"], serde_json::json!(""));
    }

    #[test]
    fn test_concurrent_first_classification_collapses() {
        let registry = Arc::new(Registry::new());
        registry.register::<Gadget>();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .classification_for("Gadget", &Profile::standard())
                        .unwrap()
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for pair in results.windows(2) {
            assert!(Arc::ptr_eq(&pair[0], &pair[1]));
        }
    }
}
