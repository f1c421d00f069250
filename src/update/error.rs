use crossterm::event::KeyCode;

use crate::app::{App, AppState};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        // Errors are terminal for the request; back to the form with
        // inputs preserved.
        KeyCode::Char('r') | KeyCode::Esc | KeyCode::Enter => {
            app.status = None;
            app.state = AppState::Form;
        }
        _ => {}
    }

    Vec::new()
}
