//! Startup steps run before the first frame is drawn.
//!
//! # Components
//!
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - File-backed tracing subscriber
//! - [`theme`] - Theme preference resolution
//!
//! # Usage
//!
//! ```ignore
//! use foodsense::startup::{ambient_theme, initialize_theme, init_tracing, AppConfig};
//!
//! let config = AppConfig::from_env();
//! init_tracing(&log_dir)?;
//! let theme = initialize_theme(&store, ambient_theme()).await;
//! ```

pub mod config;
pub mod logging;
pub mod theme;

pub use config::AppConfig;
pub use logging::init_tracing;
pub use theme::{ambient_theme, initialize_theme, persist_theme, Theme, THEME_KEY};
