//! File-based preference store adapter.
//!
//! Preferences are a flat JSON object of string values stored at
//! `<config dir>/foodsense/preferences.json`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::{PreferenceError, PreferenceStore};

const APP_DIR: &str = "foodsense";
const PREFERENCES_FILE: &str = "preferences.json";

type PreferenceMap = BTreeMap<String, String>;

/// File-based preference store.
///
/// Every `set` rewrites the whole file; the store is read once at startup
/// and written only on user toggles.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store in the user's config directory.
    pub fn new() -> Result<Self, PreferenceError> {
        dirs::config_dir()
            .map(|dir| Self::with_path(dir.join(APP_DIR).join(PREFERENCES_FILE)))
            .ok_or_else(|| {
                PreferenceError::Unavailable("Failed to determine config directory".to_string())
            })
    }

    /// Create a store backed by an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the preferences file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<PreferenceMap, PreferenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(e) => return Err(PreferenceError::Io(e.to_string())),
        };

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| PreferenceError::Serialization(e.to_string()))
    }

    fn save(&self, values: &PreferenceMap) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferenceError::Io(e.to_string()))?;
        }

        let file = File::create(&self.path).map_err(|e| PreferenceError::Io(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| PreferenceError::Io(e.to_string()))
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut values = match self.load() {
            Ok(values) => values,
            Err(PreferenceError::Serialization(e)) => {
                tracing::warn!("Discarding unreadable preferences file: {}", e);
                PreferenceMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }
}
