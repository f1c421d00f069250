use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AppState};

/// Render the keybindings bar at the bottom
pub fn render_keybindings(frame: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = match &app.state {
        AppState::Form => {
            vec![
                ("Tab", "Switch field"),
                ("Ctrl+S", "Ask"),
                ("Ctrl+L", "Clear"),
                ("Ctrl+O", "Settings"),
                ("Esc", "Quit"),
            ]
        }
        AppState::Settings => {
            if app.editing_api_key {
                vec![("Type", "Edit key"), ("Enter", "Save"), ("Esc", "Cancel")]
            } else {
                vec![
                    ("j/↓ k/↑", "Select"),
                    ("h/← l/→", "Adjust"),
                    ("Enter", "Edit"),
                    ("Esc", "Back"),
                ]
            }
        }
        AppState::Fetching | AppState::Asking => {
            vec![("q", "Quit")]
        }
        AppState::Viewing => {
            vec![
                ("j/k", "Scroll"),
                ("Space/b", "Page"),
                ("c", "Copy view"),
                ("n", "New question"),
                ("o", "Settings"),
                ("q", "Quit"),
            ]
        }
        AppState::CopyView => {
            vec![("Esc/c", "Back")]
        }
        AppState::Error(_) => {
            vec![("Esc/r", "Back"), ("q", "Quit")]
        }
    };

    // Build the line with key highlights
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
