//! Screen transitions.

use super::{App, Screen};

impl App {
    /// Home or Result → Scanning. No-op when already scanning.
    pub fn start_scan(&mut self) {
        if self.view.screen == Screen::Scanning {
            return;
        }
        tracing::info!("Start scanning from {:?}", self.view.screen);
        self.clear_result();
        self.view.error = None;
        self.view.screen = Screen::Scanning;
        self.mark_dirty();
    }

    /// Result → Scanning. No-op from other screens.
    pub fn scan_again(&mut self) {
        if self.view.screen != Screen::Result {
            return;
        }
        self.start_scan();
    }

    /// Any screen → Home.
    ///
    /// An in-flight request keeps running, but its token is invalidated so
    /// the outcome is discarded when it arrives.
    pub fn go_home(&mut self) {
        if let Some(token) = self.current_request.take() {
            tracing::info!("Abandoning request {}", token);
        }
        self.clear_result();
        self.view.loading = false;
        self.view.error = None;
        self.view.screen = Screen::Home;
        self.mark_dirty();
    }

    /// Hide the error banner.
    pub fn dismiss_error(&mut self) {
        if self.view.error.take().is_some() {
            self.mark_dirty();
        }
    }

    fn clear_result(&mut self) {
        self.view.result = None;
        self.verdict = None;
        self.card.reset();
    }
}
