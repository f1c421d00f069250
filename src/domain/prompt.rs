use crate::config::Settings;
use crate::domain::types::Truncation;

/// A composed prompt plus the side note produced when the page text was
/// cut to fit the configured content limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub text: String,
    pub truncation: Option<Truncation>,
}

/// Compose the single prompt string sent to the model. Pure function of
/// (settings, question, content): the language, format, and length
/// instruction blocks come first, then the truncated page text, then the
/// anti-echo rules and the question, each embedded exactly once.
pub fn build_prompt(settings: &Settings, question: &str, content: &str) -> BuiltPrompt {
    let original_chars = content.chars().count();
    let limit = settings.max_content_chars;

    let (content, truncation) = if original_chars > limit {
        (
            truncate_chars(content, limit),
            Some(Truncation {
                original_chars,
                limit,
            }),
        )
    } else {
        (content, None)
    };

    let text = format!(
        r#"You are an intelligent multilingual web content analyzer.

LANGUAGE: {language}
FORMAT STYLE: {format}
LENGTH PREFERENCE: {length}

WEBSITE CONTENT:
{content}

STRICT RULES:
1. Answer based ONLY on the website content above
2. Do NOT repeat or quote the question in your answer
3. Follow the language, format and length instructions exactly
4. Keep the answer focused and helpful

QUESTION: {question}

Provide the direct answer now:"#,
        language = settings.language.instruction(),
        format = settings.format_style.instruction(),
        length = settings.length_preference.instruction(),
        content = content,
        question = question,
    );

    BuiltPrompt { text, truncation }
}

/// Hard cut after `max_chars` characters, with no sentence-boundary
/// awareness.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FormatStyle, Language, LengthPreference};

    fn settings_with_limit(limit: usize) -> Settings {
        let mut settings = Settings::default();
        settings.max_content_chars = limit;
        settings
    }

    #[test]
    fn no_truncation_at_or_below_limit() {
        let settings = settings_with_limit(5_000);
        let content = "a".repeat(5_000);
        let built = build_prompt(&settings, "what?", &content);
        assert!(built.truncation.is_none());
        assert!(built.text.contains(&content));
    }

    #[test]
    fn truncates_to_exactly_the_limit_and_reports_it() {
        let settings = settings_with_limit(5_000);
        let content = "b".repeat(5_001);
        let built = build_prompt(&settings, "what?", &content);
        assert_eq!(
            built.truncation,
            Some(Truncation {
                original_chars: 5_001,
                limit: 5_000,
            })
        );
        assert!(built.text.contains(&"b".repeat(5_000)));
        assert!(!built.text.contains(&content));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let settings = settings_with_limit(5_000);
        let content = "ह".repeat(5_002);
        let built = build_prompt(&settings, "क्या?", &content);
        let truncation = built.truncation.expect("should truncate");
        assert_eq!(truncation.original_chars, 5_002);
        assert!(built.text.contains(&"ह".repeat(5_000)));
        assert!(!built.text.contains(&"ह".repeat(5_001)));
    }

    #[test]
    fn prompt_is_deterministic() {
        let settings = Settings::default();
        let first = build_prompt(&settings, "same question", "same content");
        let second = build_prompt(&settings, "same question", "same content");
        assert_eq!(first, second);
    }

    #[test]
    fn question_and_content_appear_exactly_once() {
        let settings = Settings::default();
        let question = "is-this-the-unique-question-token?";
        let content = "unique-content-token about ferrets";
        let built = build_prompt(&settings, question, content);
        assert_eq!(built.text.matches(question).count(), 1);
        assert_eq!(built.text.matches(content).count(), 1);
    }

    #[test]
    fn instruction_blocks_follow_settings() {
        let mut settings = Settings::default();
        settings.language = Language::Hindi;
        settings.format_style = FormatStyle::Bullets;
        settings.length_preference = LengthPreference::Short;
        let built = build_prompt(&settings, "q", "c");
        assert!(built.text.contains(Language::Hindi.instruction()));
        assert!(built.text.contains(FormatStyle::Bullets.instruction()));
        assert!(built.text.contains(LengthPreference::Short.instruction()));
    }
}
