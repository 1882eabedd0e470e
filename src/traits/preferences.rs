//! Preference store trait abstraction.
//!
//! A tiny string key-value side channel used for the theme preference.

use async_trait::async_trait;

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The store location could not be determined
    Unavailable(String),
    /// IO error
    Io(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Unavailable(msg) => write!(f, "Preference store unavailable: {}", msg),
            PreferenceError::Io(msg) => write!(f, "IO error: {}", msg),
            PreferenceError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Trait for reading and writing string preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key is stored
    /// - `Ok(None)` if it is absent
    /// - `Err(error)` if the store could not be read
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_error_display() {
        assert_eq!(
            PreferenceError::Io("read-only".to_string()).to_string(),
            "IO error: read-only"
        );
        assert_eq!(
            PreferenceError::Unavailable("no config dir".to_string()).to_string(),
            "Preference store unavailable: no config dir"
        );
        assert_eq!(
            PreferenceError::Serialization("eof".to_string()).to_string(),
            "Serialization error: eof"
        );
    }
}
