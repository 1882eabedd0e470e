//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the traits defined in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FilePreferenceStore`] - JSON file preference storage
//! - [`KeyboardWedgeDecoder`] - Barcode events from scanner keystrokes
//! - [`FrameDirectoryCamera`] - Preview frames from an image directory
//! - [`TerminalCamera`] - The two camera sources combined
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockCamera`] - Decode injection and resource counting
//! - [`mock::InMemoryPreferences`] - In-memory preference storage

pub mod file_preferences;
pub mod frame_directory;
pub mod keyboard_wedge;
pub mod mock;
pub mod reqwest_http;
pub mod terminal_camera;

pub use file_preferences::FilePreferenceStore;
pub use frame_directory::FrameDirectoryCamera;
pub use keyboard_wedge::KeyboardWedgeDecoder;
pub use mock::{InMemoryPreferences, MockCamera, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use terminal_camera::TerminalCamera;
