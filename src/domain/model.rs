use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 預設的問候對象
pub const DEFAULT_NAME: &str = "World";

/// Language codes accepted by the command line.
///
/// Only `es`, `en` and `fr` have their own template; the rest fall back to
/// Spanish in the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
    Fr,
    It,
    Pt,
    Pl,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Es,
        Language::En,
        Language::Fr,
        Language::It,
        Language::Pt,
        Language::Pl,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Pl => "pl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| format!("unsupported language code: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    pub name: String,
    pub language: Language,
    pub include_time: bool,
}

impl GreetingRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }
}

impl Default for GreetingRequest {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            language: Language::default(),
            include_time: false,
        }
    }
}

/// Counts and flags derived from a greeting string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingStats {
    pub character_count: usize,
    pub word_count: usize,
    pub has_exclamation: bool,
    pub has_question: bool,
}

impl fmt::Display for GreetingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Greeting statistics:")?;
        writeln!(f, "  - Characters: {}", self.character_count)?;
        writeln!(f, "  - Words: {}", self.word_count)?;
        writeln!(f, "  - Has exclamation: {}", yes_no(self.has_exclamation))?;
        write!(f, "  - Has question: {}", yes_no(self.has_question))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert!("de".parse::<Language>().is_err());
        assert!("ES".parse::<Language>().is_err());
    }

    #[test]
    fn test_request_defaults() {
        let request = GreetingRequest::default();
        assert_eq!(request.name, "World");
        assert_eq!(request.language, Language::Es);
        assert!(!request.include_time);

        let request = GreetingRequest::new("Ana")
            .with_language(Language::Fr)
            .with_time(true);
        assert_eq!(request.name, "Ana");
        assert_eq!(request.language, Language::Fr);
        assert!(request.include_time);
    }

    #[test]
    fn test_stats_display_block() {
        let stats = GreetingStats {
            character_count: 12,
            word_count: 2,
            has_exclamation: true,
            has_question: false,
        };

        let expected = "Greeting statistics:\n  - Characters: 12\n  - Words: 2\n  - Has exclamation: Yes\n  - Has question: No";
        assert_eq!(stats.to_string(), expected);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = GreetingStats {
            character_count: 0,
            word_count: 0,
            has_exclamation: false,
            has_question: true,
        };

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "characterCount": 0,
                "wordCount": 0,
                "hasExclamation": false,
                "hasQuestion": true
            })
        );
    }
}
