use crossterm::event::{KeyCode, KeyModifiers};

use crate::domain::types::{Answer, PageContent, QueryError};

#[derive(Debug)]
pub enum Action {
    Input {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    PageFetched(Result<PageContent, QueryError>),
    AnswerGenerated(Result<Answer, QueryError>),
}
