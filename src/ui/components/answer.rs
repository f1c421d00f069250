use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

use super::header::render_header;

/// Render the answer view: header, page stats, truncation side note, and
/// the generated text.
pub fn render_answer(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header (app name, URL, question)
            Constraint::Min(10),   // Answer body
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "ANSWER",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )));

    if let Some(page) = &app.page {
        lines.push(Line::from(Span::styled(
            format!("Content found: {} characters", page.text.chars().count()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(truncation) = &app.truncation {
        lines.push(Line::from(Span::styled(
            format!(
                "Content truncated to {} characters (from {} total)",
                truncation.limit, truncation.original_chars
            ),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));

    if let Some(answer) = &app.answer {
        for text_line in answer.text.lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Style::default().fg(Color::White),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press c for a plain view you can select and copy from.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .scroll((app.scroll_offset, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
