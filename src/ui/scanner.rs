//! Scanning screen: mode switcher, viewfinder and the loading overlay.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::{centered, column};
use super::theme::Palette;
use crate::app::App;
use crate::models::CaptureMode;

pub const ANALYZING: &str = "Analyzing...";

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let area = column(area);
    let [switcher, viewfinder] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(5)]).areas(area);

    frame.render_widget(
        Paragraph::new(mode_switcher_line(app.scanner.mode, palette)).alignment(Alignment::Center),
        switcher,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" {} ", app.scanner.mode.label()));
    let inner = block.inner(viewfinder);
    frame.render_widget(block, viewfinder);

    let paragraph = Paragraph::new(viewfinder_lines(app, palette))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);

    if app.is_loading() {
        render_overlay(frame, inner, app.tick_count, palette);
    }
}

/// `[b] Barcode  [l] Label` with the active mode highlighted.
pub fn mode_switcher_line(active: CaptureMode, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, mode) in [("b", CaptureMode::Barcode), ("l", CaptureMode::Label)] {
        let style = if mode == active {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.dim()
        };
        spans.push(Span::styled(format!(" [{}] {} ", key, mode.label()), style));
        spans.push(Span::raw("  "));
    }
    spans.pop();
    Line::from(spans)
}

fn viewfinder_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let scanner = &app.scanner;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            scanner.mode.hint(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
    ];

    if !scanner.camera_ready {
        lines.push(Line::from(Span::styled("Camera unavailable", palette.dim())));
        lines.push(Line::from(Span::styled(
            "Switch mode to try again",
            palette.dim(),
        )));
        return lines;
    }

    match scanner.mode {
        CaptureMode::Barcode => {
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(palette.accent)),
                Span::styled(
                    format!("{}_", scanner.pending_input),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Scan with a barcode reader or type the digits and press Enter",
                palette.dim(),
            )));
        }
        CaptureMode::Label if !app.is_loading() => {
            lines.push(Line::from(vec![
                Span::styled(
                    "[Space]",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Capture"),
            ]));
        }
        CaptureMode::Label => {}
    }
    lines
}

fn render_overlay(frame: &mut Frame, area: Rect, tick: u64, palette: &Palette) {
    let overlay = centered(area, 20, 3);
    let spinner = SPINNER[(tick as usize) % SPINNER.len()];

    frame.render_widget(Clear, overlay);
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(palette.accent)),
        Span::styled(ANALYZING, Style::default().fg(palette.text)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    )
    .style(palette.base());
    frame.render_widget(paragraph, overlay);
}
