//! UI rendering for foodsense.
//!
//! Every frame is a vertical stack: the error banner (when there is one),
//! the current screen, and a one-line key hint footer. Colours come from
//! the [`Palette`] of the active theme.

mod banner;
mod home;
mod layout;
mod scanner;
mod theme;
mod verdict;

pub use layout::{centered, LayoutContext};
pub use theme::{Palette, COLOR_CAUTION, COLOR_DANGER, COLOR_NEUTRAL, COLOR_SAFE, DARK, LIGHT};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Screen};

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let banner_height = if app.view().error.is_some() { 1 } else { 0 };
    let [banner_area, body, footer] = Layout::vertical([
        Constraint::Length(banner_height),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    if let Some(message) = &app.view().error {
        banner::render(frame, banner_area, message, &palette);
    }

    let body = pad(body);
    match app.screen() {
        Screen::Home => home::render(frame, body, &palette),
        Screen::Scanning => scanner::render(frame, body, app, &palette),
        Screen::Result => match app.verdict() {
            Some(view) => verdict::render(frame, body, view, &app.card, &palette),
            None => home::render(frame, body, &palette),
        },
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(footer_hint(app), palette.dim())))
            .alignment(Alignment::Center),
        footer,
    );
}

/// Key hints for the current screen.
fn footer_hint(app: &App) -> String {
    let screen = match app.screen() {
        Screen::Home => "Enter scan",
        Screen::Scanning => "b/l mode · Space capture · Esc home",
        Screen::Result => "a scan again · i ingredients · Esc home",
    };
    format!("{} · t theme · q quit", screen)
}

/// One row of breathing room above the body.
fn pad(area: Rect) -> Rect {
    if area.height > 4 {
        Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        }
    } else {
        area
    }
}
