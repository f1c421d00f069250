use crate::action::Action;
use crate::config::Settings;
use crate::domain::types::{PageContent, QueryError};
use crate::domain::{extract, fetch, llm};

/// Side effects requested by `update()`. Each command carries the settings
/// snapshot taken when it was issued.
pub enum Command {
    FetchPage { url: String, settings: Settings },
    GenerateAnswer { prompt: String, settings: Settings },
}

pub async fn execute_command(command: Command) -> Action {
    match command {
        Command::FetchPage { url, settings } => {
            Action::PageFetched(load_page(url, settings.timeout_secs).await)
        }
        Command::GenerateAnswer { prompt, settings } => {
            let Some(api_key) = settings.api_key else {
                return Action::AnswerGenerated(Err(QueryError::MissingCredential));
            };
            Action::AnswerGenerated(llm::generate_answer(&prompt, &api_key, &settings.model).await)
        }
    }
}

async fn load_page(url: String, timeout_secs: u64) -> Result<PageContent, QueryError> {
    let html = fetch::fetch_page(&url, timeout_secs).await?;
    let text = extract::extract_page_text(&html)?;
    Ok(PageContent { url, text })
}
