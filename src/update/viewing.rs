use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, AppState};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if app.state == AppState::CopyView {
        if matches!(
            code,
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q')
        ) {
            app.state = AppState::Viewing;
        }
        return Vec::new();
    }

    match (code, modifiers) {
        (KeyCode::Char('q'), _) => app.should_quit = true,
        // Chrome-free view for terminal select/copy
        (KeyCode::Char('c'), KeyModifiers::NONE) => app.state = AppState::CopyView,
        (KeyCode::Char('n'), KeyModifiers::NONE) => app.new_question(),
        (KeyCode::Char('o'), KeyModifiers::NONE) => app.open_settings(),
        (KeyCode::Esc, _) => app.state = AppState::Form,
        // Line scrolling: j/k or arrows
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            app.scroll_offset = app.scroll_offset.saturating_add(1)
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            app.scroll_offset = app.scroll_offset.saturating_sub(1)
        }
        // Page scrolling: Ctrl+d/u or Space/b (vim style)
        (KeyCode::Char('d'), KeyModifiers::CONTROL)
        | (KeyCode::Char(' '), KeyModifiers::NONE)
        | (KeyCode::PageDown, _) => app.scroll_offset = app.scroll_offset.saturating_add(20),
        (KeyCode::Char('u'), KeyModifiers::CONTROL)
        | (KeyCode::Char('b'), KeyModifiers::NONE)
        | (KeyCode::PageUp, _) => app.scroll_offset = app.scroll_offset.saturating_sub(20),
        _ => {}
    }

    Vec::new()
}
