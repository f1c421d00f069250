use serde::{Deserialize, Serialize};

use crate::domain::types::{Answer, QueryError};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Send one prompt to the Gemini generateContent endpoint and return the
/// generated text. The caller checks for a credential before invoking
/// this; every failure here (quota, malformed key, network) surfaces as a
/// generic API failure with the underlying message attached. No explicit
/// timeout, no streaming, no retries.
pub async fn generate_answer(
    prompt: &str,
    api_key: &str,
    model: &str,
) -> Result<Answer, QueryError> {
    let client = reqwest::Client::new();

    let request = GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };

    let url = format!("{API_BASE}/{model}:generateContent?key={api_key}");

    let response = client
        .post(url)
        .json(&request)
        .send()
        .await
        .map_err(|err| QueryError::Api(err.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(QueryError::Api(format!("{status}: {body}")));
    }

    let api_response: GenerateContentResponse = response
        .json()
        .await
        .map_err(|err| QueryError::Api(format!("failed to parse response: {err}")))?;

    parse_answer(api_response)
}

fn parse_answer(response: GenerateContentResponse) -> Result<Answer, QueryError> {
    if let Some(err) = response.error {
        return Err(QueryError::Api(err.message));
    }

    let text = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(QueryError::Api("empty response from model".to_string()));
    }

    Ok(Answer { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Answer, QueryError> {
        let response: GenerateContentResponse =
            serde_json::from_str(json).expect("fixture should deserialize");
        parse_answer(response)
    }

    #[test]
    fn joins_candidate_parts_into_answer_text() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "First part."}, {"text": "Second part."}]
                }
            }]
        }"#;
        let answer = parse(json).expect("should parse");
        assert_eq!(answer.text, "First part.\nSecond part.");
    }

    #[test]
    fn api_error_payload_becomes_api_failure() {
        let json = r#"{
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        }"#;
        assert_eq!(
            parse(json),
            Err(QueryError::Api("API key not valid".to_string()))
        );
    }

    #[test]
    fn missing_candidates_is_an_api_failure() {
        assert!(matches!(parse("{}"), Err(QueryError::Api(_))));
        assert!(matches!(
            parse(r#"{"candidates": []}"#),
            Err(QueryError::Api(_))
        ));
    }

    #[test]
    fn candidate_without_text_parts_is_an_api_failure() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        assert!(matches!(parse(json), Err(QueryError::Api(_))));
    }
}
