//! Unified error type for foodsense.
//!
//! `FoodsenseError` folds the capture, network, payload and preference
//! failures into one enum with a single category and log code.

use std::fmt;

use super::capture::CaptureError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use crate::traits::PreferenceError;

/// Unified error type for foodsense.
#[derive(Debug, Clone)]
pub enum FoodsenseError {
    /// Camera acquisition or still capture failed.
    Capture(CaptureError),

    /// Transport failure talking to the analysis service.
    Network(NetworkError),

    /// The service answered with a payload we could not use.
    InvalidResponse { message: String },

    /// Theme preference storage failed.
    Preferences(PreferenceError),
}

impl FoodsenseError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        FoodsenseError::InvalidResponse {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FoodsenseError::Capture(_) => ErrorCategory::Capture,
            FoodsenseError::Network(NetworkError::HttpStatus { .. }) => ErrorCategory::Server,
            FoodsenseError::Network(_) => ErrorCategory::Network,
            FoodsenseError::InvalidResponse { .. } => ErrorCategory::Response,
            FoodsenseError::Preferences(_) => ErrorCategory::Storage,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FoodsenseError::Capture(err) => err.error_code(),
            FoodsenseError::Network(err) => err.error_code(),
            FoodsenseError::InvalidResponse { .. } => "E_RESP_INVALID",
            FoodsenseError::Preferences(_) => "E_PREF",
        }
    }
}

impl fmt::Display for FoodsenseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodsenseError::Capture(err) => write!(f, "{}", err),
            FoodsenseError::Network(err) => write!(f, "{}", err),
            FoodsenseError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            FoodsenseError::Preferences(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FoodsenseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoodsenseError::Capture(err) => Some(err),
            FoodsenseError::Network(err) => Some(err),
            FoodsenseError::InvalidResponse { .. } => None,
            FoodsenseError::Preferences(err) => Some(err),
        }
    }
}

impl From<CaptureError> for FoodsenseError {
    fn from(err: CaptureError) -> Self {
        FoodsenseError::Capture(err)
    }
}

impl From<NetworkError> for FoodsenseError {
    fn from(err: NetworkError) -> Self {
        FoodsenseError::Network(err)
    }
}

impl From<PreferenceError> for FoodsenseError {
    fn from(err: PreferenceError) -> Self {
        FoodsenseError::Preferences(err)
    }
}

impl From<serde_json::Error> for FoodsenseError {
    fn from(err: serde_json::Error) -> Self {
        FoodsenseError::InvalidResponse {
            message: err.to_string(),
        }
    }
}
