//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the persistence seam of the list store. It
//! deals in whole string values: there are no partial updates.

use crate::error::Result;

/// Persistent string-to-string storage.
///
/// Implementations must ensure:
/// - `set` replaces the previous value in full
/// - A failed `set` leaves the previous value readable
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key was never
    /// written or has been removed.
    ///
    /// # Errors
    ///
    /// Returns `CartError::StorageRead` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `CartError::StorageWrite` if the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_trait_is_object_safe() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
