use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, FormField};

const URL_PLACEHOLDER: &str = "https://example.com";
const QUESTION_PLACEHOLDER: &str = "What is this website about?";

/// Render the URL + question form
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL field
            Constraint::Min(5),    // Question field
            Constraint::Length(2), // Status line
        ])
        .split(area);

    render_field(
        frame,
        app,
        chunks[0],
        FormField::Url,
        " Website URL ",
        &app.url_input,
        URL_PLACEHOLDER,
    );
    render_field(
        frame,
        app,
        chunks[1],
        FormField::Question,
        " Your Question ",
        &app.question_input,
        QUESTION_PLACEHOLDER,
    );
    render_status(frame, app, chunks[2]);

    set_cursor(frame, app, chunks[0], chunks[1]);
}

fn render_field(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    field: FormField,
    title: &str,
    text: &str,
    placeholder: &str,
) {
    let is_focused = app.focused_field == field;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if text.is_empty() {
        Paragraph::new(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(text.to_string()).style(Style::default().fg(Color::White))
    };

    let paragraph = content
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let key_status = if app.settings.has_api_key() {
        Span::styled("● API key configured", Style::default().fg(Color::Green))
    } else {
        Span::styled("● API key not set", Style::default().fg(Color::Red))
    };

    let mut spans = vec![Span::styled(" ", Style::default()), key_status];

    if let Some(status) = &app.status {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Place the terminal cursor inside the focused field. Long lines that
/// wrap visually are not accounted for.
fn set_cursor(frame: &mut Frame, app: &App, url_area: Rect, question_area: Rect) {
    let (area, text) = match app.focused_field {
        FormField::Url => (url_area, app.url_input.as_str()),
        FormField::Question => (question_area, app.question_input.as_str()),
    };

    let (col, line) = cursor_line_col(text, app.cursor_pos);
    let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
    let y = (area.y + 1 + line).min(area.bottom().saturating_sub(2));
    frame.set_cursor_position(Position::new(x, y));
}

fn cursor_line_col(text: &str, char_pos: usize) -> (u16, u16) {
    let mut line = 0u16;
    let mut col = 0u16;
    for c in text.chars().take(char_pos) {
        if c == '\n' {
            line = line.saturating_add(1);
            col = 0;
        } else {
            col = col.saturating_add(1);
        }
    }
    (col, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_position_tracks_newlines() {
        assert_eq!(cursor_line_col("", 0), (0, 0));
        assert_eq!(cursor_line_col("abc", 2), (2, 0));
        assert_eq!(cursor_line_col("ab\ncd", 3), (0, 1));
        assert_eq!(cursor_line_col("ab\ncd", 5), (2, 1));
    }
}
