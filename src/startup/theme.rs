//! Light/dark theme preference.
//!
//! The stored preference wins; without one the terminal's ambient colours
//! decide. Reading the ambient preference is an explicit startup step.

use crate::traits::{PreferenceError, PreferenceStore};

/// Preference key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// Environment variable terminals use to advertise `fg;bg` colour indices.
pub const COLORFGBG_VAR: &str = "COLORFGBG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. Anything but `dark`/`light` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// The host's preference, read from `COLORFGBG`.
pub fn ambient_theme() -> Theme {
    theme_from_colorfgbg(std::env::var(COLORFGBG_VAR).ok().as_deref())
}

/// Background index 7 (white) or 15 (bright white) means a light terminal.
pub fn theme_from_colorfgbg(value: Option<&str>) -> Theme {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(7) | Some(15) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Resolve the theme to start with.
///
/// Store failures and unreadable values fall back to `ambient`.
pub async fn initialize_theme(store: &dyn PreferenceStore, ambient: Theme) -> Theme {
    match store.get(THEME_KEY).await {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
            tracing::warn!("Ignoring unknown theme preference {:?}", raw);
            ambient
        }),
        Ok(None) => ambient,
        Err(e) => {
            tracing::warn!("Failed to read theme preference: {}", e);
            ambient
        }
    }
}

pub async fn persist_theme(
    store: &dyn PreferenceStore,
    theme: Theme,
) -> Result<(), PreferenceError> {
    store.set(THEME_KEY, theme.as_str()).await
}
