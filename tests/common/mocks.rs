//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `foodsense::adapters::mock` and adds builders for common response setups.

pub use foodsense::adapters::mock::{
    InMemoryPreferences, MockCamera, MockHttpClient, MockResponse, RecordedBody, RecordedRequest,
};
pub use foodsense::error::NetworkError;
pub use foodsense::traits::{Headers, HttpClient, Response};

use serde_json::Value;
use std::time::Duration;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Answer `url` with a 200 JSON body.
    pub fn with_json_response(self, url: &str, json: Value) -> Self {
        self.client.set_response(url, MockResponse::json(json));
        self
    }

    /// Answer `url` with a JSON body after `delay`.
    pub fn with_delayed_json(self, url: &str, delay: Duration, json: Value) -> Self {
        self.client.set_response(
            url,
            MockResponse::Delayed(delay, Response::new(200, json.to_string().into())),
        );
        self
    }

    /// Fail `url` the way a timed-out transport would.
    pub fn with_timeout(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(NetworkError::Timeout {
                operation: format!("POST {}", url),
                duration_secs: 30,
            }),
        );
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
