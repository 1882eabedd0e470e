//! Verdict presentation.
//!
//! [`present`] is a pure mapping from a [`ScanResult`] to everything the
//! verdict card draws. It knows nothing about colours; the UI maps each
//! [`Tone`] to the active palette.

use crate::models::{IngredientStatus, Level, RiskLevel, ScanResult, Verdict};

/// Caption above the product name.
pub const CARD_CAPTION: &str = "Analyzed";
pub const SHOW_INGREDIENTS: &str = "View Ingredients Analysis";
pub const HIDE_INGREDIENTS: &str = "Hide Details";
pub const SCAN_ANOTHER: &str = "Scan Another";

/// Semantic colour role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictIcon {
    Check,
    Warning,
    Cross,
}

impl VerdictIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            VerdictIcon::Check => "✔",
            VerdictIcon::Warning => "⚠",
            VerdictIcon::Cross => "✖",
        }
    }
}

/// One ingredient line of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    pub status: &'static str,
    pub reason: Option<String>,
    pub emphasis: Tone,
}

/// A small labelled value next to the verdict, e.g. `Sugar: HIGH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// Display model of a verdict card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictView {
    pub tone: Tone,
    pub icon: VerdictIcon,
    pub label: &'static str,
    pub headline: String,
    pub explanation: String,
    pub image_url: Option<String>,
    pub rows: Vec<IngredientRow>,
    pub badges: Vec<Badge>,
}

impl VerdictView {
    /// Whether the card offers an expand toggle.
    pub fn can_expand(&self) -> bool {
        !self.rows.is_empty()
    }
}

pub fn present(result: &ScanResult) -> VerdictView {
    let (tone, icon) = match result.verdict {
        Verdict::Safe => (Tone::Positive, VerdictIcon::Check),
        Verdict::Caution => (Tone::Warning, VerdictIcon::Warning),
        Verdict::Avoid => (Tone::Negative, VerdictIcon::Cross),
        Verdict::Unknown => (Tone::Neutral, VerdictIcon::Warning),
    };

    VerdictView {
        tone,
        icon,
        label: result.verdict.label(),
        headline: result.product_name.clone(),
        explanation: result.explanation.clone(),
        image_url: result.image_url.clone(),
        rows: result
            .ingredients_analysis
            .iter()
            .map(|ingredient| IngredientRow {
                name: ingredient.name.clone(),
                status: ingredient.status.label(),
                reason: ingredient.reason.clone(),
                emphasis: status_tone(ingredient.status),
            })
            .collect(),
        badges: badges(result),
    }
}

/// Emphasis of an ingredient row. Depends only on the row's own status.
pub fn status_tone(status: IngredientStatus) -> Tone {
    match status {
        IngredientStatus::Risky => Tone::Negative,
        IngredientStatus::Caution => Tone::Warning,
        IngredientStatus::Safe => Tone::Positive,
    }
}

fn badges(result: &ScanResult) -> Vec<Badge> {
    let mut badges = Vec::new();

    if let Some(risk) = result.risk_level {
        let tone = match risk {
            RiskLevel::Low => Tone::Positive,
            RiskLevel::Medium => Tone::Warning,
            RiskLevel::High => Tone::Negative,
        };
        badges.push(Badge {
            label: "Risk",
            value: risk.label().to_string(),
            tone,
        });
    }

    if let Some(highlights) = &result.nutritional_highlights {
        for (label, level) in [("Sugar", highlights.sugar), ("Sodium", highlights.sodium)] {
            if let Some(level) = level {
                badges.push(Badge {
                    label,
                    value: level.label().to_string(),
                    tone: level_tone(level),
                });
            }
        }
        if let Some(processing) = &highlights.processing {
            badges.push(Badge {
                label: "Processing",
                value: processing.clone(),
                tone: Tone::Neutral,
            });
        }
    }

    badges
}

fn level_tone(level: Level) -> Tone {
    match level {
        Level::Low => Tone::Positive,
        Level::Moderate => Tone::Warning,
        Level::High => Tone::Negative,
    }
}

/// Expand/collapse state of the ingredient list.
///
/// Lives beside the view state, not inside it, and is reset whenever a new
/// result is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCardState {
    expanded: bool,
}

impl VerdictCardState {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the list open or shut. Does nothing for a card without rows.
    pub fn toggle(&mut self, view: &VerdictView) {
        if view.can_expand() {
            self.expanded = !self.expanded;
        }
    }

    pub fn reset(&mut self) {
        self.expanded = false;
    }

    /// Label of the expand toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            HIDE_INGREDIENTS
        } else {
            SHOW_INGREDIENTS
        }
    }
}
