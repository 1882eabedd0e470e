//! Error banner shown above every screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let style = Style::default().fg(palette.banner_fg).bg(palette.banner_bg);
    let line = Line::from(vec![
        Span::styled(format!(" {} ", message), style.add_modifier(Modifier::BOLD)),
        Span::styled(" [x] dismiss ", style),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).style(style),
        area,
    );
}
