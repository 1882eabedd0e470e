//! Issuing analysis requests and applying their outcomes.

use std::future::Future;

use super::{App, AppMessage, Screen};
use crate::error::CaptureError;
use crate::models::{RequestOutcome, RequestToken, StillImage};
use crate::presenter::present;

impl App {
    /// Send a decoded barcode for analysis.
    ///
    /// Ignored unless scanning, while loading, or for blank codes. Returns
    /// whether a request was issued.
    pub fn submit_barcode(&mut self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            tracing::debug!("Ignoring empty barcode");
            return false;
        }
        if !self.accepts_submission() {
            tracing::debug!("Dropping barcode {}", code);
            return false;
        }

        let client = self.analysis.clone();
        let code = code.to_string();
        self.spawn_request(async move { client.analyze_barcode(&code).await });
        true
    }

    /// Send a captured still for analysis. Same guards as
    /// [`submit_barcode`](Self::submit_barcode).
    pub fn submit_image(&mut self, still: StillImage) -> bool {
        if !self.accepts_submission() {
            tracing::debug!("Dropping still image");
            return false;
        }

        let client = self.analysis.clone();
        self.spawn_request(async move { client.analyze_image(&still).await });
        true
    }

    /// Apply an outcome if it belongs to the current request.
    ///
    /// Returns whether it was applied.
    pub fn apply_outcome(&mut self, token: RequestToken, outcome: RequestOutcome) -> bool {
        if self.current_request != Some(token) {
            tracing::debug!("Discarding stale outcome {}", token);
            return false;
        }
        self.current_request = None;
        self.view.loading = false;

        match outcome {
            RequestOutcome::Success(result) => {
                tracing::info!("Showing result for {}", result.product_name);
                self.verdict = Some(present(&result));
                self.card.reset();
                self.view.result = Some(result);
                self.view.error = None;
                self.view.screen = Screen::Result;
            }
            RequestOutcome::Failure(reason) => {
                self.view.error = Some(reason);
            }
        }
        self.mark_dirty();
        true
    }

    /// Show a camera failure in the banner. Never fatal.
    ///
    /// While a request is loading the failure is only logged; the banner
    /// belongs to the request.
    pub fn report_capture_error(&mut self, err: &CaptureError) {
        tracing::warn!(code = err.error_code(), "Capture unavailable: {}", err);
        if self.view.loading {
            return;
        }
        self.view.error = Some(err.user_message());
        self.mark_dirty();
    }

    fn accepts_submission(&self) -> bool {
        self.view.screen == Screen::Scanning && !self.view.loading
    }

    fn spawn_request<F>(&mut self, request: F)
    where
        F: Future<Output = RequestOutcome> + Send + 'static,
    {
        let token = self.next_token();
        self.current_request = Some(token);
        self.view.loading = true;
        self.view.error = None;
        self.mark_dirty();
        tracing::info!("Request {} in flight", token);

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = request.await;
            let _ = tx.send(AppMessage::AnalysisCompleted { token, outcome });
        });
    }
}
