use clap::ValueEnum;

pub const TIMEOUT_SECS_MIN: u64 = 5;
pub const TIMEOUT_SECS_MAX: u64 = 30;
pub const MAX_CONTENT_MIN: usize = 5_000;
pub const MAX_CONTENT_MAX: usize = 50_000;
pub const MAX_CONTENT_STEP: usize = 1_000;

/// Session settings. A clone is taken as an immutable snapshot for each
/// pipeline invocation, so edits in the settings screen never affect a
/// request already in flight.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub max_content_chars: usize,
    pub language: Language,
    pub format_style: FormatStyle,
    pub length_preference: LengthPreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 10,
            max_content_chars: 15_000,
            language: Language::Auto,
            format_style: FormatStyle::Professional,
            length_preference: LengthPreference::Medium,
        }
    }
}

impl Settings {
    /// Build settings from environment variables, falling back to defaults.
    /// `GEMINI_API_KEY` takes precedence over `GOOGLE_API_KEY`.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        settings.api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Some(secs) = std::env::var("REQUEST_TIMEOUT")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            settings.set_timeout_secs(secs);
        }

        if let Some(chars) = std::env::var("MAX_CONTENT_LENGTH")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            settings.set_max_content_chars(chars);
        }

        settings
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Store a key entered in the settings screen; a blank entry clears it.
    pub fn set_api_key(&mut self, key: &str) {
        let key = key.trim();
        self.api_key = if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        };
    }

    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout_secs = secs.clamp(TIMEOUT_SECS_MIN, TIMEOUT_SECS_MAX);
    }

    pub fn set_max_content_chars(&mut self, chars: usize) {
        self.max_content_chars = chars.clamp(MAX_CONTENT_MIN, MAX_CONTENT_MAX);
    }
}

/// Step through a ValueEnum's variants, wrapping at both ends.
pub fn cycle<T: ValueEnum + Copy + PartialEq>(current: T, delta: isize) -> T {
    let variants = T::value_variants();
    let len = variants.len() as isize;
    let index = variants
        .iter()
        .position(|variant| *variant == current)
        .unwrap_or(0) as isize;
    variants[(index + delta).rem_euclid(len) as usize]
}

/// Response language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Auto,
    English,
    Hindi,
    Hinglish,
    Urdu,
    Bengali,
    Tamil,
    Telugu,
    Gujarati,
    Marathi,
    Punjabi,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Auto => "Auto-detect from question",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Hinglish => "Hinglish (Hindi + English)",
            Language::Urdu => "Urdu",
            Language::Bengali => "Bengali",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Gujarati => "Gujarati",
            Language::Marathi => "Marathi",
            Language::Punjabi => "Punjabi",
        }
    }

    /// Instruction block embedded in the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Language::Auto => {
                "Detect the language and mixing pattern of the question and respond in the \
                 exact same style. If the question mixes Hindi and English words, answer in \
                 the same Hinglish mix; do not convert it to pure Hindi or pure English."
            }
            Language::English => "Respond ONLY in English.",
            Language::Hindi => "Respond ONLY in Hindi (केवल हिंदी में जवाब दें).",
            Language::Hinglish => {
                "Respond ONLY in Hinglish (Hindi and English words mixed together, written \
                 in Roman script)."
            }
            Language::Urdu => "Respond ONLY in Urdu.",
            Language::Bengali => "Respond ONLY in Bengali.",
            Language::Tamil => "Respond ONLY in Tamil.",
            Language::Telugu => "Respond ONLY in Telugu.",
            Language::Gujarati => "Respond ONLY in Gujarati.",
            Language::Marathi => "Respond ONLY in Marathi.",
            Language::Punjabi => "Respond ONLY in Punjabi.",
        }
    }
}

/// Response formatting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatStyle {
    Professional,
    Simple,
    Bullets,
    Academic,
    Conversational,
}

impl FormatStyle {
    pub fn label(&self) -> &'static str {
        match self {
            FormatStyle::Professional => "Professional & Detailed",
            FormatStyle::Simple => "Simple & Easy to Understand",
            FormatStyle::Bullets => "Bullet Points & Summary",
            FormatStyle::Academic => "Academic Style",
            FormatStyle::Conversational => "Conversational Style",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            FormatStyle::Professional => {
                "Use a professional tone with detailed explanations, proper headings, and \
                 well-structured paragraphs."
            }
            FormatStyle::Simple => {
                "Use simple language that anyone can understand. Avoid technical jargon \
                 and explain concepts clearly."
            }
            FormatStyle::Bullets => {
                "Format your response using bullet points, numbered lists, and clear \
                 summaries for easy reading."
            }
            FormatStyle::Academic => {
                "Use an academic writing style with proper citations, formal language, \
                 and scholarly approach."
            }
            FormatStyle::Conversational => {
                "Write in a friendly, conversational tone as if talking to a friend."
            }
        }
    }
}

/// Response length preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LengthPreference {
    Short,
    Medium,
    Comprehensive,
}

impl LengthPreference {
    pub fn label(&self) -> &'static str {
        match self {
            LengthPreference::Short => "Short & Concise",
            LengthPreference::Medium => "Medium Detail",
            LengthPreference::Comprehensive => "Comprehensive & Detailed",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            LengthPreference::Short => {
                "Keep your response brief and to the point (2-3 paragraphs maximum)."
            }
            LengthPreference::Medium => {
                "Provide a moderately detailed response (4-6 paragraphs)."
            }
            LengthPreference::Comprehensive => {
                "Give a comprehensive and thorough response with all relevant details."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_clamped_to_range() {
        let mut settings = Settings::default();
        settings.set_timeout_secs(1);
        assert_eq!(settings.timeout_secs, TIMEOUT_SECS_MIN);
        settings.set_timeout_secs(300);
        assert_eq!(settings.timeout_secs, TIMEOUT_SECS_MAX);
        settings.set_timeout_secs(12);
        assert_eq!(settings.timeout_secs, 12);
    }

    #[test]
    fn max_content_is_clamped_to_range() {
        let mut settings = Settings::default();
        settings.set_max_content_chars(100);
        assert_eq!(settings.max_content_chars, MAX_CONTENT_MIN);
        settings.set_max_content_chars(1_000_000);
        assert_eq!(settings.max_content_chars, MAX_CONTENT_MAX);
        settings.set_max_content_chars(20_000);
        assert_eq!(settings.max_content_chars, 20_000);
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let mut settings = Settings::default();
        assert!(!settings.has_api_key());
        settings.set_api_key("   ");
        assert!(!settings.has_api_key());
        settings.set_api_key(" abc123 ");
        assert!(settings.has_api_key());
        assert_eq!(settings.api_key.as_deref(), Some("abc123"));
        settings.set_api_key("");
        assert!(!settings.has_api_key());
    }

    #[test]
    fn cycle_wraps_in_both_directions() {
        assert_eq!(
            cycle(LengthPreference::Short, -1),
            LengthPreference::Comprehensive
        );
        assert_eq!(
            cycle(LengthPreference::Comprehensive, 1),
            LengthPreference::Short
        );
        assert_eq!(cycle(Language::Auto, 1), Language::English);
        assert_eq!(cycle(FormatStyle::Professional, -1), FormatStyle::Conversational);
    }
}
