//! foodsense - scan a food barcode or label and get a health verdict
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod analysis;
pub mod app;
pub mod capture;
pub mod error;
pub mod models;
pub mod presenter;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
