//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`ViewState`] - Everything the View Controller owns
//! - [`Action`] - User intents produced by key handling

use crate::models::{CaptureMode, ScanResult};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Scanning,
    Result,
}

/// Top-level view state.
///
/// `result` is only set on [`Screen::Result`]. Reached through
/// [`App::view`](super::App::view); only the App mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    /// True while the current analysis request is in flight
    pub loading: bool,
    /// Transient banner message
    pub error: Option<String>,
    pub result: Option<ScanResult>,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartScan,
    SwitchMode(CaptureMode),
    CaptureStill,
    GoHome,
    ScanAgain,
    ToggleIngredients,
    ToggleTheme,
    DismissError,
    Quit,
}
