use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

/// Render the in-flight screen for the fetch and model stages, with the
/// URL being worked on underneath.
pub fn render_loading(frame: &mut Frame, app: &App, area: Rect, message: &str) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⏳ {}", message),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];

    let url = app.url_input.trim();
    if !url.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("   {}", url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let loading = Paragraph::new(lines).wrap(Wrap { trim: false });

    frame.render_widget(loading, area);
}
