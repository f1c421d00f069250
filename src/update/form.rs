use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, AppState, FormField};
use crate::command::Command;
use crate::domain::types::QueryError;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    match code {
        KeyCode::Esc => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.switch_field();
            Vec::new()
        }
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => submit(app),
        KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_form();
            Vec::new()
        }
        KeyCode::Char('o') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.open_settings();
            Vec::new()
        }
        KeyCode::Enter => {
            // Enter advances from the URL to the question; within the
            // question it inserts a newline.
            match app.focused_field {
                FormField::Url => app.switch_field(),
                FormField::Question => app.insert_char('\n'),
            }
            Vec::new()
        }
        KeyCode::Backspace => {
            app.delete_char();
            Vec::new()
        }
        KeyCode::Left => {
            app.cursor_left();
            Vec::new()
        }
        KeyCode::Right => {
            app.cursor_right();
            Vec::new()
        }
        KeyCode::Char(c) => {
            app.insert_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Validate the form and kick off a fetch. Blank inputs and a missing
/// credential are rejected here, before any network activity.
fn submit(app: &mut App) -> Vec<Command> {
    let url = app.url_input.trim();
    let question = app.question_input.trim();

    if url.is_empty() || question.is_empty() {
        app.status = Some(QueryError::EmptyInput.to_string());
        return Vec::new();
    }

    if !app.settings.has_api_key() {
        app.status = Some(QueryError::MissingCredential.to_string());
        return Vec::new();
    }

    let url = url.to_string();
    app.status = None;
    app.answer = None;
    app.page = None;
    app.truncation = None;
    app.scroll_offset = 0;
    app.state = AppState::Fetching;

    vec![Command::FetchPage {
        url,
        settings: app.settings.clone(),
    }]
}
