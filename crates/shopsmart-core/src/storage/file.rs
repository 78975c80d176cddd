//! Directory-backed store: one JSON file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CartError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::KeyValueStore;

/// Store that keeps each key in `<dir>/<key>.json`.
///
/// The directory is created lazily on the first write, so opening a store
/// at a fresh path never touches the filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidInput` if `key` could escape the directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(CartError::InvalidInput(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "read store file");
                Ok(Some(contents))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CartError::StorageRead(format!(
                "{}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        write_atomic(&path, value.as_bytes())
            .map_err(|err| CartError::StorageWrite(format!("{}: {}", path.display(), err)))?;
        debug!(path = %path.display(), bytes = value.len(), "wrote store file");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CartError::StorageWrite(format!(
                "{}: {}",
                path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.get("shoppingList").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        store.set("shoppingList", "[]").unwrap();

        assert!(dir.path().join("data").join("shoppingList.json").exists());
        assert_eq!(store.get("shoppingList").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_deletes_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("shoppingList", "[]").unwrap();
        store.remove("shoppingList").unwrap();
        store.remove("shoppingList").unwrap();
        assert!(store.get("shoppingList").unwrap().is_none());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new("/tmp/unused");
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for("").is_err());
    }
}
