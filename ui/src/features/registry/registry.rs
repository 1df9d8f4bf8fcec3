//! The form registry: single source of truth for submitted forms.
//!
//! The registry is fully materialized in memory and mirrored to its
//! storage collaborator after every mutation. On load, storage is the
//! source of truth and is deserialized wholesale.

use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use super::storage::{KeyValueStore, StoreError};
use super::types::{FormFields, FormRecord, StoredRegistry, SCHEMA_VERSION, STORAGE_KEY};

#[derive(Debug, Error)]
pub enum RegistryError {
    /// `form_name` is the registry's identity key; a second record under
    /// the same name (any casing) would be unreachable from lookup.
    #[error("a form named '{form_name}' already exists")]
    DuplicateName { form_name: String },

    /// The record was not kept: persistence failed and the in-memory
    /// sequence was rolled back rather than allowed to diverge.
    #[error("failed to persist forms: {0}")]
    Storage(#[from] StoreError),
}

pub struct FormRegistry<S: KeyValueStore> {
    store: S,
    records: Vec<FormRecord>,
}

impl<S: KeyValueStore> FormRegistry<S> {
    /// Loads the registry from storage. Fails soft: a missing, unreadable
    /// or malformed payload yields an empty registry, never an error.
    pub fn hydrate(store: S) -> Self {
        let records = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => deserialize_records(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("falling back to empty registry: {err}");
                Vec::new()
            }
        };
        Self { store, records }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[FormRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Creates a record stamped with the current time, appends it and
    /// persists the whole sequence. Field-level validation is the
    /// caller's concern; the registry only guards its identity key and
    /// the persistence write.
    pub fn create(
        &mut self,
        form_name: &str,
        description: &str,
        fields: FormFields,
    ) -> Result<FormRecord, RegistryError> {
        if self.find_by_name(form_name).is_some() {
            return Err(RegistryError::DuplicateName {
                form_name: form_name.to_string(),
            });
        }

        let record = FormRecord {
            form_name: form_name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
            fields,
        };

        self.records.push(record.clone());
        if let Err(err) = self.persist() {
            self.records.pop();
            return Err(RegistryError::Storage(err));
        }
        Ok(record)
    }

    /// Records whose `form_name` contains `query` case-insensitively,
    /// in insertion order. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<FormRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.form_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Case-insensitive exact match on `form_name`. First match wins if
    /// a pre-existing payload carries duplicates.
    pub fn find_by_name(&self, form_name: &str) -> Option<&FormRecord> {
        let wanted = form_name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.form_name.to_lowercase() == wanted)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let envelope = StoredRegistry {
            version: SCHEMA_VERSION,
            items: self.records.clone(),
        };
        let raw = serde_json::to_string(&envelope).map_err(|err| StoreError::Write {
            key: STORAGE_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.store.set(STORAGE_KEY, &raw)
    }
}

/// Accepts both the versioned envelope and the bare array the original
/// page wrote. Anything else is treated as corrupt and dropped.
fn deserialize_records(raw: &str) -> Vec<FormRecord> {
    if let Ok(envelope) = serde_json::from_str::<StoredRegistry>(raw) {
        return envelope.items;
    }
    match serde_json::from_str::<Vec<FormRecord>>(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!("discarding unparsable registry payload: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registry::storage::MemoryStore;

    fn ada() -> FormFields {
        FormFields {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            age: 30,
        }
    }

    fn registry_with(records: &[(&str, &str)]) -> FormRegistry<MemoryStore> {
        let mut registry = FormRegistry::hydrate(MemoryStore::new());
        for (form_name, description) in records {
            registry.create(form_name, description, ada()).unwrap();
        }
        registry
    }

    /// Store whose writes always fail, for exercising persistence errors.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }

        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn create_then_reload_keeps_the_record_last() {
        let store = MemoryStore::new();
        {
            let mut registry = FormRegistry::hydrate(&store);
            registry.create("first", "", ada()).unwrap();
            registry.create("contact", "basic", ada()).unwrap();
        }

        let registry = FormRegistry::hydrate(&store);
        let last = registry.records().last().unwrap();
        assert_eq!(registry.records().len(), 2);
        assert_eq!(last.form_name, "contact");
        assert_eq!(last.description, "basic");
        assert_eq!(last.fields, ada());
    }

    #[test]
    fn empty_storage_hydrates_to_empty_registry() {
        let registry = FormRegistry::hydrate(MemoryStore::new());
        assert!(registry.is_empty());
    }

    #[test]
    fn corrupt_storage_hydrates_to_empty_registry() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "not json at all {{{");
        let registry = FormRegistry::hydrate(store);
        assert!(registry.is_empty());
    }

    #[test]
    fn legacy_bare_array_payload_is_accepted() {
        let raw = r#"[{
            "formName": "contact",
            "description": "basic",
            "createdAt": "2023-04-01T12:30:00.000Z",
            "fields": { "name": "Ada", "surname": "Lovelace", "age": 30 }
        }]"#;
        let registry = FormRegistry::hydrate(MemoryStore::with_entry(STORAGE_KEY, raw));
        assert_eq!(registry.records().len(), 1);
        assert_eq!(registry.records()[0].form_name, "contact");
    }

    #[test]
    fn persisted_payload_carries_schema_version() {
        let store = MemoryStore::new();
        {
            let mut registry = FormRegistry::hydrate(&store);
            registry.create("contact", "", ada()).unwrap();
        }
        let raw = store.get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["items"][0]["formName"], "contact");
    }

    #[test]
    fn search_with_empty_query_returns_everything_in_order() {
        let registry = registry_with(&[("Alpha", ""), ("beta", ""), ("Gamma", "")]);
        let all = registry.search("");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].form_name, "Alpha");
        assert_eq!(all[2].form_name, "Gamma");
    }

    #[test]
    fn search_is_case_insensitive_and_preserves_order() {
        let registry = registry_with(&[("Alpha", ""), ("beta", "")]);

        let hits = registry.search("a");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].form_name, "Alpha");
        assert_eq!(hits[1].form_name, "beta");

        assert_eq!(registry.search("A"), registry.search("a"));
        assert_eq!(registry.search("ALPHA").len(), 1);
        assert!(registry.search("z").is_empty());
    }

    #[test]
    fn find_by_name_matches_exactly_but_case_insensitively() {
        let registry = registry_with(&[("contact", "basic")]);

        let record = registry.find_by_name("Contact").unwrap();
        assert_eq!(record.form_name, "contact");
        assert_eq!(record.fields.name, "Ada");

        assert!(registry.find_by_name("cont").is_none());
        assert!(registry.find_by_name("missing").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected_in_any_casing() {
        let mut registry = registry_with(&[("contact", "")]);
        let err = registry.create("CONTACT", "", ada()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
        assert_eq!(registry.records().len(), 1);
    }

    #[test]
    fn failed_write_is_surfaced_and_rolled_back() {
        let mut registry = FormRegistry::hydrate(BrokenStore);
        let err = registry.create("contact", "", ada()).unwrap_err();
        assert!(matches!(err, RegistryError::Storage(StoreError::Write { .. })));
        assert!(registry.is_empty());
    }
}
