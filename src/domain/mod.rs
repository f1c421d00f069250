pub mod extract;
pub mod fetch;
pub mod llm;
pub mod prompt;
pub mod types;
