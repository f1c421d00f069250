use crate::app::{App, AppState};
use crate::command::Command;
use crate::domain::prompt;
use crate::domain::types::{Answer, PageContent, QueryError};

pub fn handle_page_fetched(
    app: &mut App,
    result: Result<PageContent, QueryError>,
) -> Vec<Command> {
    match result {
        Ok(page) => {
            let built = prompt::build_prompt(&app.settings, app.question_input.trim(), &page.text);
            app.status = Some(format!(
                "Content found: {} characters",
                page.text.chars().count()
            ));
            app.truncation = built.truncation;
            app.page = Some(page);
            app.state = AppState::Asking;
            vec![Command::GenerateAnswer {
                prompt: built.text,
                settings: app.settings.clone(),
            }]
        }
        Err(err) => {
            app.state = AppState::Error(err.to_string());
            Vec::new()
        }
    }
}

pub fn handle_answer_generated(
    app: &mut App,
    result: Result<Answer, QueryError>,
) -> Vec<Command> {
    match result {
        Ok(answer) => {
            app.answer = Some(answer);
            app.scroll_offset = 0;
            app.state = AppState::Viewing;
            Vec::new()
        }
        Err(err) => {
            app.state = AppState::Error(err.to_string());
            Vec::new()
        }
    }
}
