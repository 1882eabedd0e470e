//! Environment-driven configuration.
//!
//! These tests mutate process environment variables, so they run serially.

use foodsense::startup::config::{
    API_URL_VAR, DEFAULT_TIMEOUT_SECS, FRAME_DIR_VAR, LOG_DIR_VAR, TIMEOUT_VAR,
};
use foodsense::startup::AppConfig;
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: [&str; 4] = [API_URL_VAR, TIMEOUT_VAR, FRAME_DIR_VAR, LOG_DIR_VAR];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = AppConfig::from_env();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var(API_URL_VAR, "http://10.0.0.5:8000");
    std::env::set_var(TIMEOUT_VAR, "12");
    std::env::set_var(FRAME_DIR_VAR, "/var/lib/foodsense/frames");
    std::env::set_var(LOG_DIR_VAR, "/tmp/foodsense-logs");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.api_url, "http://10.0.0.5:8000");
    assert_eq!(config.timeout_secs, 12);
    assert_eq!(
        config.frame_dir,
        Some(PathBuf::from("/var/lib/foodsense/frames"))
    );
    assert_eq!(
        config.resolved_log_dir(),
        Some(PathBuf::from("/tmp/foodsense-logs"))
    );
}

#[test]
#[serial]
fn test_invalid_values_keep_defaults() {
    clear_env();
    std::env::set_var(API_URL_VAR, "   ");
    std::env::set_var(TIMEOUT_VAR, "soon");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config, AppConfig::default());
}
