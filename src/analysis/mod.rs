//! Client for the remote analysis service.
//!
//! Both request shapes collapse every failure into
//! [`RequestOutcome::Failure`] with a generic message; the detailed cause is
//! only logged.

mod client;

pub use client::{
    AnalysisClient, BARCODE_FAILURE_MESSAGE, BARCODE_PATH, DEFAULT_BASE_URL,
    IMAGE_FAILURE_MESSAGE, IMAGE_PATH,
};
