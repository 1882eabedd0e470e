//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the two request shapes the
//! analysis service accepts, enabling dependency injection and mocking in
//! tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::error::NetworkError;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// A single file field of a multipart form upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    /// Form field name
    pub field_name: String,
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the file
    pub mime_type: String,
    /// File contents
    pub bytes: Bytes,
}

impl MultipartFile {
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Bytes,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Trait for HTTP client operations.
///
/// Implementations include the production reqwest-based client and a
/// recording mock. Non-2xx responses are returned as `Ok(Response)`; only
/// transport-level failures are `Err`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST a JSON body.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, NetworkError>;

    /// POST a multipart form containing a single file field.
    async fn post_multipart(
        &self,
        url: &str,
        file: MultipartFile,
        headers: &Headers,
    ) -> Result<Response, NetworkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_new() {
        let response = Response::new(200, Bytes::from("Hello"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(Response::new(299, Bytes::new()).is_success());
        assert!(!Response::new(300, Bytes::new()).is_success());
        assert!(!Response::new(400, Bytes::new()).is_success());
        assert!(!Response::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Status {
            status: String,
        }

        let response = Response::new(200, Bytes::from(r#"{"status":"ok"}"#));
        let data: Status = response.json().unwrap();
        assert_eq!(data.status, "ok");
        assert_eq!(response.text().unwrap(), r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_multipart_file_new() {
        let file = MultipartFile::new(
            "file",
            "label_scan.jpg",
            "image/jpeg",
            Bytes::from_static(b"jpg"),
        );
        assert_eq!(file.field_name, "file");
        assert_eq!(file.file_name, "label_scan.jpg");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.bytes.len(), 3);
    }
}
