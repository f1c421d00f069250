use std::time::Duration;

use crate::domain::types::QueryError;

/// GET a page body with a hard timeout. The URL is passed through
/// unvalidated; anything the HTTP client rejects surfaces as a network
/// failure. No retries, library-default redirect handling.
pub async fn fetch_page(url: &str, timeout_secs: u64) -> Result<String, QueryError> {
    let client = reqwest::Client::new();

    let response = client
        .get(url)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await
        .map_err(|err| map_error(err, timeout_secs))?;

    response
        .text()
        .await
        .map_err(|err| map_error(err, timeout_secs))
}

fn map_error(err: reqwest::Error, timeout_secs: u64) -> QueryError {
    if err.is_timeout() {
        QueryError::Timeout(timeout_secs)
    } else {
        QueryError::Network(err.to_string())
    }
}
