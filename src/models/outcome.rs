use std::fmt;

use super::ScanResult;

/// Result of one analysis request. Exactly one arm is ever populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(ScanResult),
    /// Carries a user-facing reason; diagnostics are logged, not stored here
    Failure(String),
}

impl RequestOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        RequestOutcome::Failure(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    /// The scan result, if this is a success.
    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            RequestOutcome::Success(result) => Some(result),
            RequestOutcome::Failure(_) => None,
        }
    }

    /// The failure reason, if this is a failure.
    pub fn reason(&self) -> Option<&str> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::Failure(reason) => Some(reason),
        }
    }
}

/// Identifies an analysis request. Tokens only ever increase, so an outcome
/// whose token differs from the controller's current one is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The token issued after this one.
    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
