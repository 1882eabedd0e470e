//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures and a harness that wires a
//! [`Coordinator`] to a mock camera and a mock analysis service.
//!
//! # Example
//!
//! ```ignore
//! let mut harness = Harness::new();
//! harness.http.set_default_response(MockResponse::json(scan_json("safe", "Oat Milk")));
//! harness.coordinator.dispatch(Action::StartScan).await;
//! harness.camera.emit("0123456789012");
//! harness.decode().await;
//! harness.pump().await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use futures::FutureExt;
use serde_json::{json, Value};
use std::sync::Arc;

use foodsense::analysis::AnalysisClient;
use foodsense::app::{App, Coordinator};
use foodsense::capture::CaptureSession;
use foodsense::startup::Theme;

/// Base URL every harness client talks to.
pub const TEST_BASE_URL: &str = "http://analysis.test";

/// A minimal service payload.
pub fn scan_json(verdict: &str, product_name: &str) -> Value {
    json!({
        "product_name": product_name,
        "verdict": verdict,
        "explanation": format!("{} looks {}", product_name, verdict),
        "ingredients_analysis": [],
    })
}

/// A payload with a few ingredient rows and highlights.
pub fn detailed_scan_json() -> Value {
    json!({
        "product_name": "Choco Crunch",
        "verdict": "Caution",
        "explanation": "High in added sugar.",
        "image_url": "https://images.test/choco.jpg",
        "ingredients_analysis": [
            {"name": "Sugar", "status": "caution", "reason": "Added sugar"},
            {"name": "Whole Grain Oats", "status": "safe"},
            {"name": "Red 40", "status": "risky", "reason": "Artificial dye"}
        ],
        "risk_level": "Medium",
        "nutritional_highlights": {
            "sugar": "High",
            "sodium": "Low",
            "processing": "Ultra-processed"
        }
    })
}

/// Build an App that talks to `http`.
pub fn test_app(http: &MockHttpClient) -> App {
    App::new(
        AnalysisClient::new(Arc::new(http.clone()), TEST_BASE_URL),
        Arc::new(InMemoryPreferences::new()),
        Theme::Dark,
    )
}

/// Coordinator plus handles on the mocks behind it.
pub struct Harness {
    pub http: MockHttpClient,
    pub camera: MockCamera,
    pub coordinator: Coordinator,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_http(MockHttpClient::new())
    }

    pub fn with_http(http: MockHttpClient) -> Self {
        let camera = MockCamera::new();
        let coordinator = Coordinator::new(
            test_app(&http),
            CaptureSession::new(Arc::new(camera.clone())),
        );
        Self {
            http,
            camera,
            coordinator,
        }
    }

    /// Wait for the next app message and route it through the coordinator.
    pub async fn pump(&mut self) {
        let app = &mut self.coordinator.app;
        let mut rx = app.message_rx.take().expect("receiver taken");
        let msg = rx.recv().await.expect("channel closed");
        app.message_rx = Some(rx);
        self.coordinator.handle_message(msg).await;
    }

    /// Deliver a decode event that is already buffered. Returns false if
    /// the session had nothing ready.
    pub async fn decode(&mut self) -> bool {
        match self.coordinator.next_decode().now_or_never() {
            Some(decoded) => {
                self.coordinator.handle_decode(decoded).await;
                true
            }
            None => false,
        }
    }

    /// Barcodes sent to the service, in order.
    pub fn submitted_barcodes(&self) -> Vec<String> {
        self.http
            .get_requests()
            .iter()
            .filter_map(|r| r.json())
            .filter_map(|body| body["barcode"].as_str().map(str::to_string))
            .collect()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
