use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::{
    MAX_CONTENT_MAX, MAX_CONTENT_MIN, TIMEOUT_SECS_MAX, TIMEOUT_SECS_MIN,
};

/// Render the settings screen
pub fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "SETTINGS",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let settings = &app.settings;
    let rows: [(&str, String); 6] = [
        ("API Key", api_key_value(app)),
        (
            "Request Timeout",
            format!(
                "{} s  ({}-{})",
                settings.timeout_secs, TIMEOUT_SECS_MIN, TIMEOUT_SECS_MAX
            ),
        ),
        (
            "Max Content Length",
            format!(
                "{} chars  ({}-{})",
                settings.max_content_chars, MAX_CONTENT_MIN, MAX_CONTENT_MAX
            ),
        ),
        ("Response Language", settings.language.label().to_string()),
        ("Response Format", settings.format_style.label().to_string()),
        (
            "Response Length",
            settings.length_preference.label().to_string(),
        ),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let marker = if is_selected { "▶ " } else { "  " };

        let label_style = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<20}", label), label_style),
            Span::styled(value.clone(), Style::default().fg(Color::Yellow)),
        ]));
    }

    lines.push(Line::from(""));

    let key_status = if settings.has_api_key() {
        Span::styled("● API key configured", Style::default().fg(Color::Green))
    } else {
        Span::styled("● API key not set", Style::default().fg(Color::Red))
    };
    lines.push(Line::from(vec![Span::styled("  ", Style::default()), key_status]));

    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Yellow),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Settings ");

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn api_key_value(app: &App) -> String {
    if app.editing_api_key {
        format!("{}▏", mask(&app.api_key_input))
    } else if app.settings.has_api_key() {
        "•••••••• (configured)".to_string()
    } else {
        "(not set)".to_string()
    }
}

fn mask(input: &str) -> String {
    "•".repeat(input.chars().count())
}
