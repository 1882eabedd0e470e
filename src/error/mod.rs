//! Error handling for foodsense.
//!
//! - **Error Categories**: classification used as the log label
//! - **Domain-specific Errors**: capture and network failures
//! - **Unified Error Type**: `FoodsenseError` consolidates them
//!
//! Every surfaced error becomes the same transient banner on the current
//! screen. Nothing here is fatal and nothing is retried automatically.
//!
//! | Category | Description |
//! |----------|-------------|
//! | Network | Connection, timeout |
//! | Server | Non-2xx from the service |
//! | Response | Malformed or incomplete payload |
//! | Capture | Camera permission or device |
//! | Storage | Preference file |

mod capture;
mod category;
mod foodsense_error;
mod network;
mod result;

pub use capture::CaptureError;
pub use category::ErrorCategory;
pub use foodsense_error::FoodsenseError;
pub use network::{classify_reqwest_error, NetworkError};
pub use result::FoodsenseResult;
