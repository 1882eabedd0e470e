//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling unit testing without network, camera or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockCamera`] - Camera with decode injection and a resource counter
//! - [`InMemoryPreferences`] - In-memory preference storage

pub mod camera;
pub mod http;
pub mod preferences;

pub use camera::MockCamera;
pub use http::{MockHttpClient, MockResponse, RecordedBody, RecordedRequest};
pub use preferences::InMemoryPreferences;
