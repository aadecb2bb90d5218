//! Persistent key/value storage for the preferred theme

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::error::StorageError;

/// Storage key holding the user's preferred theme
pub const PREFERRED_THEME_KEY: &str = "preferred-theme";

/// String key/value storage that outlives the session
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-only storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object on disk
///
/// The file is read on every `get` and rewritten on every `set`, so other
/// processes see changes immediately. A missing file reads as empty; a
/// corrupt one is replaced on the next `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Store under the user's local data directory
    pub fn default_location() -> Result<Self, StorageError> {
        let dir = dirs::data_local_dir().ok_or(StorageError::Unavailable)?;
        Ok(Self::new(dir.join("surveydeck").join("storage.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<FxHashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(FxHashMap::default()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Corrupt(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding corrupt storage file"
                );
                FxHashMap::default()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut store = FileStore::new(&path);
        assert_eq!(store.get(PREFERRED_THEME_KEY).unwrap(), None);

        store.set("other", "kept").unwrap();
        store.set(PREFERRED_THEME_KEY, "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(PREFERRED_THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(
            store.get(PREFERRED_THEME_KEY),
            Err(StorageError::Corrupt(_))
        ));
    }

    #[test]
    fn test_set_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{oops").unwrap();
        let mut store = FileStore::new(&path);
        store.set(PREFERRED_THEME_KEY, "light").unwrap();
        assert_eq!(store.get(PREFERRED_THEME_KEY).unwrap().as_deref(), Some("light"));
    }
}
