use crate::application::Storage;
use crate::domain::{StorageError, StorageResult};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key-value preferences kept in a JSON object on disk.
///
/// A missing file reads as an empty store. Writes reload the file first so
/// keys written by other versions are preserved; a file that no longer parses
/// is replaced. Saves go through a temporary file renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(StorageError::Malformed(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                other
            ))),
        }
    }

    fn write_replacing(&self, contents: &str) -> StorageResult<()> {
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl Storage for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self.load()?.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(StorageError::Malformed(format!(
                "value for '{}' is not a string: {}",
                key, other
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = match self.load() {
            Ok(map) => map,
            Err(e @ (StorageError::Json(_) | StorageError::Malformed(_))) => {
                warn!(path = %self.path.display(), error = %e, "Settings file unreadable, replacing it");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&map)?;
        self.write_replacing(&json)?;

        debug!(path = %self.path.display(), key, value, "Preference saved");
        Ok(())
    }
}

/// In-memory store, used when no settings directory is available and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut store = JsonFileStore::new(&path);

        store.set("theme", "dark").unwrap();
        assert!(path.exists());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"other": "kept", "theme": "light"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("theme", "dark").unwrap();

        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("theme"), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_set_replaces_truncated_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme": "da"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_set_replaces_non_object_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2]").unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_non_object_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("theme"), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_non_string_value_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme": 1}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("theme"), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }
}
