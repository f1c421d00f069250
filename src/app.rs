use crate::config::Settings;
use crate::domain::types::{Answer, PageContent, Truncation};

/// Application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// URL + question form
    Form,
    /// Settings screen
    Settings,
    /// Fetching the page
    Fetching,
    /// Waiting for the model
    Asking,
    /// Answer view
    Viewing,
    /// Chrome-free answer text for terminal select/copy
    CopyView,
    /// Error state
    Error(String),
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Url,
    Question,
}

/// Number of rows on the settings screen
pub const SETTINGS_ROWS: usize = 6;

/// The main application
pub struct App {
    /// Current state
    pub state: AppState,
    /// Session settings, rebuilt on explicit edits in the settings screen
    pub settings: Settings,
    /// URL field contents
    pub url_input: String,
    /// Question field contents (may span multiple lines)
    pub question_input: String,
    /// Focused form field
    pub focused_field: FormField,
    /// Cursor position in the focused field, as a character offset
    pub cursor_pos: usize,
    /// Selected row in the settings screen
    pub settings_selected: usize,
    /// Whether the API key row is in text-entry mode
    pub editing_api_key: bool,
    /// Buffer for API key entry
    pub api_key_input: String,
    /// Fetched page content (after extraction)
    pub page: Option<PageContent>,
    /// Truncation side note, if the page text was cut
    pub truncation: Option<Truncation>,
    /// Generated answer (after the LLM call)
    pub answer: Option<Answer>,
    /// Scroll offset for the answer view
    pub scroll_offset: u16,
    /// Status message
    pub status: Option<String>,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::Form,
            settings,
            url_input: String::new(),
            question_input: String::new(),
            focused_field: FormField::Url,
            cursor_pos: 0,
            settings_selected: 0,
            editing_api_key: false,
            api_key_input: String::new(),
            page: None,
            truncation: None,
            answer: None,
            scroll_offset: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn prefill_url(&mut self, url: String) {
        self.cursor_pos = url.chars().count();
        self.url_input = url;
        self.focused_field = FormField::Url;
    }

    pub fn prefill_question(&mut self, question: String) {
        self.cursor_pos = question.chars().count();
        self.question_input = question;
        self.focused_field = FormField::Question;
    }

    /// Get the focused field's text
    pub fn focused_text(&self) -> &str {
        match self.focused_field {
            FormField::Url => &self.url_input,
            FormField::Question => &self.question_input,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focused_field {
            FormField::Url => &mut self.url_input,
            FormField::Question => &mut self.question_input,
        }
    }

    /// Move focus to the other form field, cursor at its end
    pub fn switch_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Url => FormField::Question,
            FormField::Question => FormField::Url,
        };
        self.cursor_pos = self.focused_text().chars().count();
    }

    /// Insert character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_pos;
        let text = self.focused_text_mut();
        let idx = byte_index(text, cursor);
        text.insert(idx, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let cursor = self.cursor_pos;
        let text = self.focused_text_mut();
        let idx = byte_index(text, cursor - 1);
        text.remove(idx);
        self.cursor_pos -= 1;
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let len = self.focused_text().chars().count();
        if self.cursor_pos < len {
            self.cursor_pos += 1;
        }
    }

    /// Clear both fields and any previous result
    pub fn clear_form(&mut self) {
        self.url_input.clear();
        self.question_input.clear();
        self.focused_field = FormField::Url;
        self.cursor_pos = 0;
        self.reset_result();
    }

    /// Keep the URL and settings, start over with a fresh question
    pub fn new_question(&mut self) {
        self.question_input.clear();
        self.focused_field = FormField::Question;
        self.cursor_pos = 0;
        self.reset_result();
        self.state = AppState::Form;
    }

    fn reset_result(&mut self) {
        self.page = None;
        self.truncation = None;
        self.answer = None;
        self.scroll_offset = 0;
        self.status = None;
    }

    pub fn open_settings(&mut self) {
        self.settings_selected = 0;
        self.editing_api_key = false;
        self.state = AppState::Settings;
    }

    /// Leave settings, returning to the answer if one exists
    pub fn close_settings(&mut self) {
        self.editing_api_key = false;
        self.state = if self.answer.is_some() {
            AppState::Viewing
        } else {
            AppState::Form
        };
    }

    /// Move settings selection down
    pub fn settings_down(&mut self) {
        if self.settings_selected < SETTINGS_ROWS - 1 {
            self.settings_selected += 1;
        }
    }

    /// Move settings selection up
    pub fn settings_up(&mut self) {
        self.settings_selected = self.settings_selected.saturating_sub(1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_multibyte_characters() {
        let mut app = App::default();
        app.focused_field = FormField::Question;
        app.insert_char('ह');
        app.insert_char('i');
        assert_eq!(app.question_input, "हi");
        app.cursor_left();
        app.delete_char();
        assert_eq!(app.question_input, "i");
        assert_eq!(app.cursor_pos, 0);
    }

    #[test]
    fn switch_field_places_cursor_at_end() {
        let mut app = App::default();
        app.prefill_question("hello".to_string());
        app.switch_field();
        assert_eq!(app.focused_field, FormField::Url);
        assert_eq!(app.cursor_pos, 0);
        app.url_input = "https://example.com".to_string();
        app.switch_field();
        app.switch_field();
        assert_eq!(app.cursor_pos, app.url_input.chars().count());
    }

    #[test]
    fn close_settings_returns_to_answer_when_present() {
        let mut app = App::default();
        app.open_settings();
        app.close_settings();
        assert_eq!(app.state, AppState::Form);

        app.answer = Some(crate::domain::types::Answer {
            text: "hi".to_string(),
        });
        app.open_settings();
        app.close_settings();
        assert_eq!(app.state, AppState::Viewing);
    }
}
