//! Application state and the View Controller.
//!
//! [`App`] owns the [`ViewState`] and the current analysis request. It
//! never touches the camera; [`Coordinator`] pairs it with the capture
//! session.

mod coordinator;
mod handlers;
mod input;
mod messages;
mod navigation;
mod submit;
mod types;

pub use coordinator::Coordinator;
pub use input::{map_key, KeyInput};
pub use messages::AppMessage;
pub use types::{Action, Screen, ViewState};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::analysis::AnalysisClient;
use crate::models::{CaptureMode, RequestToken};
use crate::presenter::{VerdictCardState, VerdictView};
use crate::startup::{persist_theme, Theme};
use crate::traits::PreferenceStore;

/// What the scanning screen shows about the camera. Filled in by the
/// coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerDisplay {
    pub mode: CaptureMode,
    /// A capture resource is live
    pub camera_ready: bool,
    /// Keystrokes typed since the last completed barcode
    pub pending_input: String,
}

/// Main application state
pub struct App {
    view: ViewState,
    /// Token of the request whose outcome will be applied
    current_request: Option<RequestToken>,
    /// Last token handed out
    last_token: RequestToken,
    analysis: AnalysisClient,
    preferences: Arc<dyn PreferenceStore>,
    /// Active colour theme
    pub theme: Theme,
    /// Expand state of the verdict card
    pub card: VerdictCardState,
    /// Presented form of `view.result`
    verdict: Option<VerdictView>,
    /// Camera status mirrored for rendering
    pub scanner: ScannerDisplay,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Tick counter for the loading animation
    pub tick_count: u64,
}

impl App {
    pub fn new(
        analysis: AnalysisClient,
        preferences: Arc<dyn PreferenceStore>,
        theme: Theme,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            view: ViewState::default(),
            current_request: None,
            last_token: RequestToken::default(),
            analysis,
            preferences,
            theme,
            card: VerdictCardState::default(),
            verdict: None,
            scanner: ScannerDisplay::default(),
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn is_loading(&self) -> bool {
        self.view.loading
    }

    /// Presented verdict for the result screen.
    pub fn verdict(&self) -> Option<&VerdictView> {
        self.verdict.as_ref()
    }

    /// Token of the request still awaited, if any.
    pub fn current_request(&self) -> Option<RequestToken> {
        self.current_request
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick. Only loading animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view.loading {
            self.mark_dirty();
        }
    }

    /// Open or shut the ingredient list on the verdict card.
    pub fn toggle_ingredients(&mut self) {
        if let Some(view) = &self.verdict {
            self.card.toggle(view);
            self.mark_dirty();
        }
    }

    /// Flip the theme and persist the choice in the background.
    ///
    /// The in-memory theme changes even if the write later fails.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        tracing::info!("Theme set to {}", self.theme.as_str());

        let store = Arc::clone(&self.preferences);
        let tx = self.message_tx.clone();
        let theme = self.theme;
        tokio::spawn(async move {
            if let Err(e) = persist_theme(store.as_ref(), theme).await {
                let _ = tx.send(AppMessage::ThemeSaveFailed {
                    error: e.to_string(),
                });
            }
        });
    }

    fn next_token(&mut self) -> RequestToken {
        self.last_token = self.last_token.next();
        self.last_token
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("view", &self.view)
            .field("current_request", &self.current_request)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{InMemoryPreferences, MockHttpClient};

    pub(crate) fn test_app(http: &MockHttpClient) -> App {
        App::new(
            AnalysisClient::new(Arc::new(http.clone()), "http://test"),
            Arc::new(InMemoryPreferences::new()),
            Theme::Dark,
        )
    }

    /// Wait for the next message and handle it.
    pub(crate) async fn pump(app: &mut App) {
        let mut rx = app.message_rx.take().expect("receiver taken");
        let msg = rx.recv().await.expect("channel closed");
        app.message_rx = Some(rx);
        app.handle_message(msg);
    }
}
