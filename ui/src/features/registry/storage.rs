//! Key-value storage collaborators for the form registry.
//!
//! The registry only ever talks to a [`KeyValueStore`], so alternate
//! backends (a file, an embedded database) can substitute for browser
//! localStorage without touching registry logic.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;

/// Storage failures, split by direction so callers can recover reads
/// locally while surfacing failed writes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage read failed for key '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("storage write failed for key '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Minimal key-value contract the registry persists through.
pub trait KeyValueStore {
    /// Returns the raw value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str);
}

// Lets a registry borrow a store owned elsewhere (tests reopen the same
// MemoryStore to check persistence).
impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Browser localStorage backend.
///
/// Values are kept as the raw strings the registry serializes, so the
/// payload stays byte-compatible with what other tabs (or the original
/// page) wrote under the same key.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StoreError::Read {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // set_item is where quota-exceeded failures show up.
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StoreError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory backend for tests and non-browser embedders.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with an existing payload under `key`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert!(store.get("items").unwrap().is_none());

        store.set("items", "[]").unwrap();
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[]"));

        store.remove("items");
        assert!(store.get("items").unwrap().is_none());
    }
}
