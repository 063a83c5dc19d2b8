//! Settings persistence
//!
//! The host decides where settings live. [`JsonFileStore`] keeps them in a
//! JSON file written atomically; [`MemoryStore`] keeps them in memory.

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not replace settings file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Durable key-value document holding the settings
pub trait SettingsStore {
    /// Raw stored data, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<Value>, StoreError>;
    /// Replace the stored data
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Settings kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        // Write to temp file first for atomic save
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut temp_file, settings)?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.path)?;

        log::info!(
            "saved {} rule(s) to {}",
            settings.replacements.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Settings kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<Value>,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored data
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            saves: 0,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Value>, StoreError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.data = Some(serde_json::to_value(settings)?);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rule::Rule;
    use serde_json::json;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("data.json"));
        assert!(store.load().unwrap().is_none());

        let settings = Settings {
            auto_replace: false,
            replacements: vec![Rule::new("ад", "давление")],
        };
        store.save(&settings).unwrap();

        let value = store.load().unwrap().unwrap();
        assert_eq!(value["autoReplace"], json!(false));
        assert_eq!(value["replacements"][0]["abbr"], json!("ад"));
    }

    #[test]
    fn test_file_store_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.saves, 1);
        assert_eq!(
            store.data(),
            Some(&json!({"autoReplace": true, "replacements": []}))
        );
    }
}
