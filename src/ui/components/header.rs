use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Render the fixed header with the page URL and question
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    let url = app
        .page
        .as_ref()
        .map(|page| page.url.as_str())
        .unwrap_or(app.url_input.trim());

    lines.push(Line::from(vec![
        Span::styled(
            "PageSage",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(url.to_string(), Style::default().fg(Color::White)),
    ]));

    if let Some(question) = app.question_input.trim().lines().next() {
        lines.push(Line::from(vec![Span::styled(
            question.to_string(),
            Style::default().fg(Color::Yellow),
        )]));
    }

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}
