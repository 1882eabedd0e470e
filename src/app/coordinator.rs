//! Pairs the View Controller with the capture session.
//!
//! The coordinator routes user actions and decode events, then pushes the
//! resulting screen and loading state into the capture session. Neither
//! side reaches into the other.

use crossterm::event::KeyEvent;

use super::{map_key, Action, App, AppMessage, KeyInput, ScannerDisplay, Screen};
use crate::adapters::KeyboardWedgeDecoder;
use crate::capture::{CaptureSession, DecodeEvent, SessionPhase};
use crate::error::CaptureError;

pub struct Coordinator {
    pub app: App,
    capture: CaptureSession,
    wedge: Option<KeyboardWedgeDecoder>,
}

impl Coordinator {
    pub fn new(app: App, capture: CaptureSession) -> Self {
        let mut coordinator = Self {
            app,
            capture,
            wedge: None,
        };
        coordinator.refresh_display();
        coordinator
    }

    /// Forward wedge keystrokes to `wedge`.
    pub fn with_wedge(mut self, wedge: KeyboardWedgeDecoder) -> Self {
        self.wedge = Some(wedge);
        self
    }

    pub fn capture(&self) -> &CaptureSession {
        &self.capture
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        let input = map_key(key, self.app.screen());
        self.handle_input(input).await;
    }

    pub async fn handle_input(&mut self, input: KeyInput) {
        match input {
            KeyInput::Action(action) => self.dispatch(action).await,
            KeyInput::WedgeChar(c) => {
                if let Some(wedge) = &self.wedge {
                    wedge.push_char(c);
                }
                self.refresh_display();
            }
            KeyInput::WedgeEnter => {
                if let Some(wedge) = &self.wedge {
                    wedge.finish_line();
                }
                self.refresh_display();
            }
            KeyInput::WedgeBackspace => {
                if let Some(wedge) = &self.wedge {
                    wedge.backspace();
                }
                self.refresh_display();
            }
            KeyInput::Ignored => {}
        }
    }

    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::StartScan => self.app.start_scan(),
            Action::ScanAgain => self.app.scan_again(),
            Action::GoHome => self.app.go_home(),
            Action::SwitchMode(mode) => {
                if let Err(e) = self.capture.switch_mode(mode).await {
                    self.app.report_capture_error(&e);
                }
                self.app.mark_dirty();
            }
            Action::CaptureStill => self.capture_still().await,
            Action::ToggleIngredients => self.app.toggle_ingredients(),
            Action::ToggleTheme => self.app.toggle_theme(),
            Action::DismissError => self.app.dismiss_error(),
            Action::Quit => self.app.quit(),
        }
        self.sync_capture().await;
    }

    pub async fn handle_message(&mut self, msg: AppMessage) {
        self.app.handle_message(msg);
        self.sync_capture().await;
    }

    /// Wait for the next decode event. Never resolves while no decode
    /// subscription is live.
    pub async fn next_decode(&mut self) -> Result<DecodeEvent, CaptureError> {
        self.capture.next_decode().await
    }

    pub async fn handle_decode(&mut self, decoded: Result<DecodeEvent, CaptureError>) {
        match decoded {
            Ok(event) if self.capture.accepts(&event) => {
                self.app.submit_barcode(&event.code);
            }
            Ok(event) => {
                tracing::debug!("Rejecting decode from {}", event.subscription);
            }
            Err(e) => self.app.report_capture_error(&e),
        }
        self.sync_capture().await;
    }

    async fn capture_still(&mut self) {
        if self.app.screen() != Screen::Scanning || self.app.is_loading() {
            return;
        }
        match self.capture.capture_still().await {
            Ok(still) => {
                self.app.submit_image(still);
            }
            Err(e) => self.app.report_capture_error(&e),
        }
    }

    /// Bring the capture session in line with the view.
    async fn sync_capture(&mut self) {
        let scanning = self.app.screen() == Screen::Scanning;
        if scanning && !self.capture.is_scanning() {
            if let Err(e) = self.capture.enter_scanning().await {
                self.app.report_capture_error(&e);
            }
        } else if !scanning && self.capture.is_scanning() {
            self.capture.leave_scanning();
        }
        self.capture.set_paused(self.app.is_loading());
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        let display = ScannerDisplay {
            mode: self.capture.mode(),
            camera_ready: self.capture.phase() != SessionPhase::Idle,
            pending_input: self
                .wedge
                .as_ref()
                .map(|w| w.pending())
                .unwrap_or_default(),
        };
        if self.app.scanner != display {
            self.app.scanner = display;
            self.app.mark_dirty();
        }
    }
}
