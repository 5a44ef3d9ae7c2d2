//! Persisted preferences
//!
//! A small key-value store holding the dataset, theme flag and
//! customization between sessions. Values are JSON; typed access goes through
//! [`load_or_default`] so a corrupt or outdated entry falls back to defaults
//! instead of failing startup.

use crate::constants::{APP_DIR_NAME, PREFERENCES_FILE};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while persisting preferences
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace preferences file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Key-value persistence with get/set semantics
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError>;
}

/// Read a typed value, falling back to `T::default()` when absent or unreadable
pub fn load_or_default<T>(store: &dyn PreferenceStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Ignoring unreadable stored preference");
            T::default()
        }),
        None => T::default(),
    }
}

/// Serialize and store a typed value
pub fn save<T: Serialize>(store: &dyn PreferenceStore, key: &str, value: &T) -> Result<(), PreferenceError> {
    store.set(key, serde_json::to_value(value)?)
}

/// In-memory store, used in tests and when no config directory exists
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The file is read once on open; every `set` rewrites it atomically through a
/// temp file in the same directory.
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => match serde_json::from_str::<Value>(&content)? {
                Value::Object(map) => map,
                _ => {
                    tracing::warn!(path = %path.display(), "Preferences file is not an object, starting fresh");
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, values: &Map<String, Value>) -> Result<(), PreferenceError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut temp, values)?;
        temp.flush()?;
        temp.persist(&self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        let mut values = self.values.write();
        let previous = values.insert(key.to_string(), value);
        if let Err(e) = self.write_file(&values) {
            // Keep memory consistent with what is on disk
            match previous {
                Some(prev) => values.insert(key.to_string(), prev),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// Default location of the preferences file
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE))
}
