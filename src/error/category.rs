//! Error category classification.
//!
//! Every category ends up as the same transient banner; the category only
//! labels the log line.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems talking to the analysis service.
    Network,

    /// The analysis service answered with a non-success status.
    Server,

    /// The service answered, but the payload could not be used.
    Response,

    /// Camera or permission problems.
    Capture,

    /// Local preference storage problems. Never shown to the user.
    Storage,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Response => "response",
            ErrorCategory::Capture => "capture",
            ErrorCategory::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Response,
            ErrorCategory::Capture,
            ErrorCategory::Storage,
        ] {
            assert_eq!(category.to_string(), category.as_str());
        }
        assert_eq!(format!("category={}", ErrorCategory::Server), "category=server");
    }
}
