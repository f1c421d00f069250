mod actions;
mod error;
mod form;
mod loading;
mod settings;
mod viewing;

use crate::action::Action;
use crate::app::{App, AppState};
use crate::command::Command;

pub fn update(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::Input { code, modifiers } => match &app.state {
            AppState::Form => form::handle_input(app, code, modifiers),
            AppState::Settings => settings::handle_input(app, code),
            AppState::Viewing | AppState::CopyView => viewing::handle_input(app, code, modifiers),
            AppState::Error(_) => error::handle_input(app, code),
            AppState::Fetching | AppState::Asking => loading::handle_input(app, code),
        },
        Action::PageFetched(result) => actions::handle_page_fetched(app, result),
        Action::AnswerGenerated(result) => actions::handle_answer_generated(app, result),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::domain::types::{Answer, PageContent, QueryError};

    fn submit_action() -> Action {
        Action::Input {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn app_with_inputs() -> App {
        let mut app = App::default();
        app.prefill_url("https://example.com".to_string());
        app.prefill_question("What is this website about?".to_string());
        app
    }

    #[test]
    fn submit_without_credential_fails_before_any_command() {
        let mut app = app_with_inputs();
        assert!(!app.settings.has_api_key());

        let commands = update(&mut app, submit_action());

        assert!(commands.is_empty());
        assert_eq!(app.state, AppState::Form);
        assert_eq!(app.status, Some(QueryError::MissingCredential.to_string()));
    }

    #[test]
    fn submit_with_blank_fields_fails_before_any_command() {
        let mut app = App::default();
        app.settings.set_api_key("key");
        app.prefill_url("   ".to_string());
        app.prefill_question("question".to_string());

        let commands = update(&mut app, submit_action());

        assert!(commands.is_empty());
        assert_eq!(app.status, Some(QueryError::EmptyInput.to_string()));
    }

    #[test]
    fn submit_with_valid_inputs_issues_a_fetch() {
        let mut app = app_with_inputs();
        app.settings.set_api_key("key");

        let commands = update(&mut app, submit_action());

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            &commands[0],
            Command::FetchPage { url, .. } if url == "https://example.com"
        ));
        assert_eq!(app.state, AppState::Fetching);
    }

    #[test]
    fn fetched_page_leads_to_a_generate_command_with_truncation_note() {
        let mut app = app_with_inputs();
        app.settings.set_api_key("key");
        app.settings.set_max_content_chars(5_000);
        app.state = AppState::Fetching;

        let page = PageContent {
            url: "https://example.com".to_string(),
            text: "x".repeat(6_000),
        };
        let commands = update(&mut app, Action::PageFetched(Ok(page)));

        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], Command::GenerateAnswer { .. }));
        assert_eq!(app.state, AppState::Asking);
        let truncation = app.truncation.expect("should record truncation");
        assert_eq!(truncation.original_chars, 6_000);
        assert_eq!(truncation.limit, 5_000);
    }

    #[test]
    fn fetch_timeout_is_terminal_and_never_reaches_the_model() {
        let mut app = app_with_inputs();
        app.settings.set_api_key("key");
        app.state = AppState::Fetching;

        let commands = update(&mut app, Action::PageFetched(Err(QueryError::Timeout(10))));

        assert!(commands.is_empty());
        assert_eq!(
            app.state,
            AppState::Error(QueryError::Timeout(10).to_string())
        );
    }

    #[test]
    fn answer_moves_to_viewing() {
        let mut app = app_with_inputs();
        app.state = AppState::Asking;

        let answer = Answer {
            text: "An answer.".to_string(),
        };
        let commands = update(&mut app, Action::AnswerGenerated(Ok(answer)));

        assert!(commands.is_empty());
        assert_eq!(app.state, AppState::Viewing);
        assert!(app.answer.is_some());
    }
}
