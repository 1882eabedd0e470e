//! Camera and capture errors.

use thiserror::Error;

use crate::models::CaptureMode;

/// Reasons the capture session could not provide a decode event or a still.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("No camera device available: {0}")]
    NoDevice(String),

    #[error("Camera feed closed")]
    FeedClosed,

    #[error("Still capture requires label mode with an active preview (mode: {mode:?})")]
    NotReady { mode: CaptureMode },

    #[error("Failed to read preview frame: {0}")]
    Frame(String),

    #[error("Failed to encode still image: {0}")]
    Encode(String),
}

impl CaptureError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CaptureError::PermissionDenied => {
                "Camera access was denied. Allow camera access and try again.".to_string()
            }
            CaptureError::NoDevice(_) => {
                "No camera is available. Connect a camera or switch mode.".to_string()
            }
            CaptureError::FeedClosed => "The camera stopped. Please try again.".to_string(),
            CaptureError::NotReady { .. } => {
                "Switch to label mode to capture a photo.".to_string()
            }
            CaptureError::Frame(_) | CaptureError::Encode(_) => {
                "Could not capture a photo. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied => "E_CAP_PERMISSION",
            CaptureError::NoDevice(_) => "E_CAP_NO_DEVICE",
            CaptureError::FeedClosed => "E_CAP_CLOSED",
            CaptureError::NotReady { .. } => "E_CAP_NOT_READY",
            CaptureError::Frame(_) => "E_CAP_FRAME",
            CaptureError::Encode(_) => "E_CAP_ENCODE",
        }
    }
}
