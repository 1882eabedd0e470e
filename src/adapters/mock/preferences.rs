//! In-memory preference store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{PreferenceError, PreferenceStore};

/// In-memory preference store.
///
/// Clones share storage, so a test can keep one handle and inspect what the
/// code under test wrote through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
    /// Whether get should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether set should fail
    set_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one initial entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether set should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Read a value synchronously (for testing).
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Write a value synchronously (for testing).
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(PreferenceError::Io("Mock get failure".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(PreferenceError::Io("Mock set failure".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_roundtrip() {
        let store = InMemoryPreferences::new();
        assert_eq!(store.get("theme").await.unwrap(), None);

        store.set("theme", "light").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap(), Some("light".to_string()));
    }

    #[tokio::test]
    async fn test_in_memory_failures() {
        let store = InMemoryPreferences::with_value("theme", "dark");
        store.set_get_should_fail(true);
        assert!(store.get("theme").await.is_err());

        store.set_set_should_fail(true);
        assert!(store.set("theme", "light").await.is_err());
        assert_eq!(store.value("theme"), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = InMemoryPreferences::new();
        let handle = store.clone();
        store.set("theme", "light").await.unwrap();
        assert_eq!(handle.value("theme"), Some("light".to_string()));
    }
}
