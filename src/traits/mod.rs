//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - POSTs to the analysis service
//! - [`Camera`] - live barcode decoding and preview stills
//! - [`PreferenceStore`] - string key-value preferences

pub mod camera;
pub mod http;
pub mod preferences;

pub use camera::{Camera, DecodeStream, PreviewFeed};
pub use http::{Headers, HttpClient, MultipartFile, Response};
pub use preferences::{PreferenceError, PreferenceStore};
