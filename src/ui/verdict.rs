//! Verdict card for the result screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::column;
use super::theme::Palette;
use crate::presenter::{VerdictCardState, VerdictView, CARD_CAPTION, SCAN_ANOTHER};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &VerdictView,
    card: &VerdictCardState,
    palette: &Palette,
) {
    let area = column(area);
    let tone = palette.tone(view.tone);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tone))
        .title(Span::styled(
            format!(" {} {} ", view.icon.glyph(), view.label),
            Style::default().fg(tone).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Right);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(card_lines(view, card, inner.width, palette))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// The card body as lines, `width` columns wide.
pub fn card_lines(
    view: &VerdictView,
    card: &VerdictCardState,
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let tone = palette.tone(view.tone);
    let mut lines = vec![
        Line::from(Span::styled(CARD_CAPTION.to_uppercase(), palette.dim())),
        Line::from(vec![
            Span::styled(
                view.headline.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", view.icon.glyph(), view.label),
                Style::default().fg(tone).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            view.explanation.clone(),
            Style::default().fg(palette.text),
        )),
    ];

    if !view.badges.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::new();
        for badge in &view.badges {
            spans.push(Span::styled(format!("{}: ", badge.label), palette.dim()));
            spans.push(Span::styled(
                badge.value.clone(),
                Style::default()
                    .fg(palette.tone(badge.tone))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("   "));
        }
        spans.pop();
        lines.push(Line::from(spans));
    }

    if let Some(url) = &view.image_url {
        lines.push(Line::from(Span::styled(format!("Image: {}", url), palette.dim())));
    }

    if view.can_expand() {
        lines.push(Line::from(""));
        let chevron = if card.is_expanded() { "▴" } else { "▾" };
        lines.push(Line::from(vec![
            Span::styled("[i] ", Style::default().fg(palette.accent)),
            Span::styled(format!("{} {}", card.toggle_label(), chevron), palette.dim()),
        ]));

        if card.is_expanded() {
            for row in &view.rows {
                lines.push(ingredient_line(
                    &row.name,
                    row.status,
                    width,
                    palette.tone(row.emphasis),
                    palette,
                ));
                if let Some(reason) = &row.reason {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", reason),
                        palette.dim(),
                    )));
                }
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "[a]",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", SCAN_ANOTHER),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

/// `name ........ STATUS`, padded to `width`.
fn ingredient_line(
    name: &str,
    status: &'static str,
    width: u16,
    color: ratatui::style::Color,
    palette: &Palette,
) -> Line<'static> {
    let used = name.width() + status.width() + 2;
    let fill = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(name.to_string(), Style::default().fg(palette.text)),
        Span::styled(format!(" {} ", ".".repeat(fill)), palette.dim()),
        Span::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}
