use thiserror::Error;

/// Extracted page content, created per request and discarded once the
/// prompt has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub url: String,
    pub text: String,
}

/// Text generated by the model for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

/// Side note produced when the extracted text was cut to fit the
/// configured content limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub original_chars: usize,
    pub limit: usize,
}

/// Everything that can end a request. Each variant is terminal: the error
/// is shown to the user and the request is over, with no retry and no
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("No API key configured. Open settings (Ctrl+O) and set one.")]
    MissingCredential,
    #[error("Please fill in both the URL and your question.")]
    EmptyInput,
    #[error("No content found on the page.")]
    EmptyExtractedContent,
    #[error("Request timed out after {0} seconds. Try increasing the timeout in settings.")]
    Timeout(u64),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Gemini API error: {0}")]
    Api(String),
}
