//! Home screen: hero copy and the start key.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::layout::column;
use super::theme::Palette;

pub const TAGLINE: &str = "AI-Powered Food Intelligence";
pub const TITLE: &str = "Know What's Really Inside";
pub const SUBTITLE: &str = "Instantly analyze barcodes and nutrition labels to uncover hidden ingredients and get personalized health verdicts.";

pub const FEATURES: &[&str] = &[
    "Reads barcodes and any food label (photo or scan)",
    "Detects hidden sugars, additives, E-numbers, toxins, allergens, etc.",
    "Translates labels from any language",
    "Generates a science-based health score / Eat & Avoid verdict",
    "Provides AI nutrition advice, recipes & explanations",
];

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let accent = Style::default().fg(palette.accent);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            TAGLINE.to_uppercase(),
            accent.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SUBTITLE, palette.dim())),
        Line::from(""),
    ];

    for feature in FEATURES {
        lines.push(Line::from(vec![
            Span::styled("• ", accent),
            Span::styled(*feature, Style::default().fg(palette.text)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", accent.add_modifier(Modifier::BOLD)),
        Span::raw(" Start Scanning"),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, column(area));
}
