//! Runtime configuration.
//!
//! Everything the binary needs comes from environment variables; there are
//! no command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::DEFAULT_BASE_URL;

pub const API_URL_VAR: &str = "FOODSENSE_API_URL";
pub const TIMEOUT_VAR: &str = "FOODSENSE_TIMEOUT_SECS";
pub const FRAME_DIR_VAR: &str = "FOODSENSE_FRAME_DIR";
pub const LOG_DIR_VAR: &str = "FOODSENSE_LOG_DIR";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const APP_DIR: &str = "foodsense";

/// Configuration for a foodsense session.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use foodsense::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("http://192.168.1.20:8000")
///     .with_timeout_secs(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root URL of the analysis service
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Directory an external tool writes label preview frames into
    pub frame_dir: Option<PathBuf>,
    /// Override for the log directory
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            frame_dir: None,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the analysis service URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the preview frame directory.
    pub fn with_frame_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.frame_dir = Some(dir.into());
        self
    }

    /// Set the log directory.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Where the log file goes: the override, else the user data dir.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR)))
    }

    /// Create config from the `FOODSENSE_*` environment variables.
    ///
    /// Unset, empty or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut config = Self::default();
        if let Some(url) = get(API_URL_VAR) {
            config = config.with_api_url(url);
        }
        if let Some(secs) = get(TIMEOUT_VAR).and_then(|v| v.parse::<u64>().ok()) {
            if secs > 0 {
                config = config.with_timeout_secs(secs);
            }
        }
        if let Some(dir) = get(FRAME_DIR_VAR) {
            config = config.with_frame_dir(dir);
        }
        if let Some(dir) = get(LOG_DIR_VAR) {
            config = config.with_log_dir(dir);
        }
        config
    }
}
