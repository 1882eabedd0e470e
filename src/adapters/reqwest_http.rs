//! Reqwest-based HTTP client adapter.
//!
//! This module provides a production HTTP client implementation using reqwest,
//! implementing the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use crate::error::{classify_reqwest_error, NetworkError};
use crate::traits::{Headers, HttpClient, MultipartFile, Response};

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use foodsense::adapters::ReqwestHttpClient;
/// use foodsense::traits::HttpClient;
///
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(10));
/// let response = client
///     .post_json(
///         "http://localhost:8000/scan/barcode",
///         &json!({"barcode": "123"}),
///         &Headers::new(),
///     )
///     .await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            client,
            timeout_secs: timeout.as_secs(),
        }
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    async fn send(
        &self,
        url: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<Response, NetworkError> {
        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e, url, self.timeout_secs))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(&e, url, self.timeout_secs))?;

        Ok(Response::new(status, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, NetworkError> {
        let builder = self.client.post(url).json(body);
        let builder = Self::apply_headers(builder, headers);
        self.send(url, builder).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        file: MultipartFile,
        headers: &Headers,
    ) -> Result<Response, NetworkError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| NetworkError::InvalidRequest {
                message: format!("invalid mime type '{}': {}", file.mime_type, e),
            })?;
        let form = Form::new().part(file.field_name, part);

        let builder = self.client.post(url).multipart(form);
        let builder = Self::apply_headers(builder, headers);
        self.send(url, builder).await
    }
}
