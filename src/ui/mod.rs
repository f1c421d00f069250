pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::{App, AppState};
use components::{answer, copy_view, error, form, keybindings, loading, settings};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // The copy view gets the whole screen with no chrome, so terminal
    // selection picks up only the answer text.
    if app.state == AppState::CopyView {
        copy_view::render_copy_view(frame, app, size);
        return;
    }

    // Split into main area and bottom keybindings bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(3), // Keybindings bar
        ])
        .split(size);

    let main_area = chunks[0];
    let keys_area = chunks[1];

    match &app.state {
        AppState::Form => form::render_form(frame, app, main_area),
        AppState::Settings => settings::render_settings(frame, app, main_area),
        AppState::Fetching => {
            loading::render_loading(frame, app, main_area, "Fetching page content...")
        }
        AppState::Asking => loading::render_loading(frame, app, main_area, "Asking Gemini..."),
        AppState::Viewing => answer::render_answer(frame, app, main_area),
        AppState::Error(msg) => error::render_error(frame, main_area, msg),
        AppState::CopyView => {}
    }

    // Always render keybindings bar at bottom
    keybindings::render_keybindings(frame, app, keys_area);
}
