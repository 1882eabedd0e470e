//! Message handling for the App.

use super::{App, AppMessage};

impl App {
    /// Handle a message from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::AnalysisCompleted { token, outcome } => {
                self.apply_outcome(token, outcome);
            }
            AppMessage::ThemeSaveFailed { error } => {
                tracing::warn!("Failed to save theme preference: {}", error);
            }
        }
    }
}
