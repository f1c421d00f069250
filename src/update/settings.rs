use crossterm::event::KeyCode;

use crate::app::App;
use crate::command::Command;
use crate::config::{self, MAX_CONTENT_STEP};

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    if app.editing_api_key {
        handle_api_key_input(app, code);
        return Vec::new();
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_settings(),
        KeyCode::Char('j') | KeyCode::Down => app.settings_down(),
        KeyCode::Char('k') | KeyCode::Up => app.settings_up(),
        KeyCode::Char('h') | KeyCode::Left => adjust(app, -1),
        KeyCode::Char('l') | KeyCode::Right => adjust(app, 1),
        KeyCode::Enter => {
            if app.settings_selected == 0 {
                app.api_key_input = app.settings.api_key.clone().unwrap_or_default();
                app.editing_api_key = true;
            } else {
                adjust(app, 1);
            }
        }
        _ => {}
    }

    Vec::new()
}

fn handle_api_key_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => {
            app.settings.set_api_key(&app.api_key_input);
            app.editing_api_key = false;
            app.status = Some(if app.settings.has_api_key() {
                "API key saved for this session".to_string()
            } else {
                "API key cleared".to_string()
            });
        }
        KeyCode::Esc => {
            app.editing_api_key = false;
        }
        KeyCode::Backspace => {
            app.api_key_input.pop();
        }
        KeyCode::Char(c) => {
            app.api_key_input.push(c);
        }
        _ => {}
    }
}

fn adjust(app: &mut App, delta: isize) {
    let settings = &mut app.settings;
    match app.settings_selected {
        // API key edits happen through Enter
        0 => {}
        1 => settings.set_timeout_secs(offset(settings.timeout_secs as usize, delta, 1) as u64),
        2 => settings.set_max_content_chars(offset(
            settings.max_content_chars,
            delta,
            MAX_CONTENT_STEP,
        )),
        3 => settings.language = config::cycle(settings.language, delta),
        4 => settings.format_style = config::cycle(settings.format_style, delta),
        5 => settings.length_preference = config::cycle(settings.length_preference, delta),
        _ => {}
    }
}

fn offset(value: usize, delta: isize, step: usize) -> usize {
    if delta >= 0 {
        value.saturating_add(step)
    } else {
        value.saturating_sub(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LengthPreference, MAX_CONTENT_MAX, TIMEOUT_SECS_MIN};

    #[test]
    fn adjustments_stay_inside_ranges() {
        let mut app = App::default();
        app.settings.set_timeout_secs(TIMEOUT_SECS_MIN);
        app.settings_selected = 1;
        adjust(&mut app, -1);
        assert_eq!(app.settings.timeout_secs, TIMEOUT_SECS_MIN);

        app.settings.set_max_content_chars(MAX_CONTENT_MAX);
        app.settings_selected = 2;
        adjust(&mut app, 1);
        assert_eq!(app.settings.max_content_chars, MAX_CONTENT_MAX);
    }

    #[test]
    fn enum_rows_cycle() {
        let mut app = App::default();
        app.settings_selected = 5;
        assert_eq!(app.settings.length_preference, LengthPreference::Medium);
        adjust(&mut app, 1);
        assert_eq!(
            app.settings.length_preference,
            LengthPreference::Comprehensive
        );
        adjust(&mut app, 1);
        assert_eq!(app.settings.length_preference, LengthPreference::Short);
    }

    #[test]
    fn api_key_entry_saves_on_enter() {
        let mut app = App::default();
        app.editing_api_key = true;
        for c in "secret".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Enter);
        assert!(!app.editing_api_key);
        assert_eq!(app.settings.api_key.as_deref(), Some("secret"));
    }
}
