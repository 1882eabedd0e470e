//! AppMessage enum for async communication within the application.

use crate::models::{RequestOutcome, RequestToken};

/// Messages received from spawned tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// An analysis request finished
    AnalysisCompleted {
        token: RequestToken,
        outcome: RequestOutcome,
    },
    /// Writing the theme preference failed
    ThemeSaveFailed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_completed_carries_token() {
        let msg = AppMessage::AnalysisCompleted {
            token: RequestToken::new(3),
            outcome: RequestOutcome::failure("nope"),
        };
        match msg {
            AppMessage::AnalysisCompleted { token, outcome } => {
                assert_eq!(token.value(), 3);
                assert_eq!(outcome.reason(), Some("nope"));
            }
            _ => panic!("Expected AnalysisCompleted"),
        }
    }

    #[test]
    fn test_messages_are_cloneable() {
        let msg = AppMessage::ThemeSaveFailed {
            error: "read-only".to_string(),
        };
        let cloned = msg.clone();
        assert!(matches!(cloned, AppMessage::ThemeSaveFailed { error } if error == "read-only"));
    }
}
