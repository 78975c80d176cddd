//! In-memory store.

use std::collections::HashMap;

use crate::error::{CartError, Result};
use crate::storage::traits::KeyValueStore;

/// Map-backed store. Nothing survives the process.
///
/// `fail_writes` makes every `set` fail, which lets callers exercise the
/// write-failure path without touching the filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn fail_writes(mut self, fail: bool) -> Self {
        self.fail_writes = fail;
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CartError::StorageWrite(format!(
                "write to '{}' rejected",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let mut store = MemoryStore::new();
        store.set("list", "[1]").unwrap();
        store.set("list", "[2]").unwrap();
        assert_eq!(store.get("list").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_failing_writes_keep_old_value() {
        let mut store = MemoryStore::with_value("list", "[]").fail_writes(true);
        assert!(store.set("list", "[1]").is_err());
        assert_eq!(store.get("list").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_absent_key() {
        let mut store = MemoryStore::new();
        store.remove("missing").unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }
}
