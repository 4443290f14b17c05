//! Export dialects: how a message header looks and how its timestamp reads.
//!
//! WhatsApp exports differ by phone locale. Two header styles are supported:
//!
//! - [`Dialect::French`]: `01/02/2016 à 15:30 - Alice: Hello`
//! - [`Dialect::American`]: `2/1/16, 15:30 - Alice: Hello`
//!
//! A [`HeaderPattern`] pairs the header regex with the chrono format used to
//! read the timestamp field. It is normally built from a [`Dialect`], but a
//! custom pair can be supplied for exports that only differ slightly.
//!
//! # Example
//!
//! ```rust
//! use chatlens::dialect::{Dialect, HeaderPattern, detect_dialect};
//!
//! let lines = ["01/02/2016 à 15:30 - Alice: Hello"];
//! assert_eq!(detect_dialect(&lines), Some(Dialect::French));
//!
//! let header = HeaderPattern::from(Dialect::French);
//! assert_eq!(header.timestamp_format(), "%d/%m/%Y à %H:%M");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// Number of leading lines inspected by [`detect_dialect`].
pub const DETECTION_SAMPLE: usize = 20;

/// Supported header dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Day/month/4-digit year with an "à" separator, 24-hour clock.
    /// Example: `01/02/2016 à 15:30 - `
    #[serde(alias = "fr")]
    French,
    /// Month/day/2-digit year with a comma separator, 24-hour clock.
    /// Example: `2/1/16, 15:30 - `
    #[serde(alias = "us")]
    American,
}

impl Dialect {
    /// Returns the header regex for this dialect.
    pub fn pattern(self) -> &'static str {
        match self {
            Dialect::French => r"\d{2}/\d{2}/\d{4} à \d{2}:\d{2} - ",
            Dialect::American => r"\d{1,2}/\d{1,2}/\d{2}, \d{2}:\d{2} - ",
        }
    }

    /// Returns the chrono format of the timestamp field (the header minus `" - "`).
    pub fn timestamp_format(self) -> &'static str {
        match self {
            Dialect::French => "%d/%m/%Y à %H:%M",
            Dialect::American => "%m/%d/%y, %H:%M",
        }
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::French => "French",
            Dialect::American => "American",
        }
    }

    /// Returns all dialects, in detection priority order.
    pub fn all() -> &'static [Dialect] {
        &[Dialect::French, Dialect::American]
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["french", "fr", "american", "us"]
    }

    fn regex(self) -> &'static Regex {
        match self {
            Dialect::French => &FRENCH_HEADER,
            Dialect::American => &AMERICAN_HEADER,
        }
    }

    fn line_start_regex(self) -> &'static Regex {
        match self {
            Dialect::French => &FRENCH_LINE_START,
            Dialect::American => &AMERICAN_LINE_START,
        }
    }
}

static FRENCH_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Dialect::French.pattern()).expect("built-in header pattern"));
static AMERICAN_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Dialect::American.pattern()).expect("built-in header pattern"));
static FRENCH_LINE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}", Dialect::French.pattern())).expect("built-in header pattern")
});
static AMERICAN_LINE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}", Dialect::American.pattern())).expect("built-in header pattern")
});

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "french" | "fr" => Ok(Dialect::French),
            "american" | "us" => Ok(Dialect::American),
            _ => Err(format!(
                "Unknown dialect: '{}'. Expected one of: {}",
                s,
                Dialect::all_names().join(", ")
            )),
        }
    }
}

/// A header regex paired with the timestamp format it implies.
///
/// Chosen once per parse and never mutated.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
    timestamp_format: String,
    name: &'static str,
}

impl HeaderPattern {
    /// Builds a custom header pattern.
    ///
    /// The regex must match the whole header including the trailing `" - "`;
    /// the timestamp format applies to the header text before that separator.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDialect`] if the regex does not compile.
    pub fn new(pattern: &str, timestamp_format: impl Into<String>) -> Result<Self, ChatlensError> {
        let regex =
            Regex::new(pattern).map_err(|e| ChatlensError::invalid_dialect(pattern, e))?;
        Ok(Self {
            regex,
            timestamp_format: timestamp_format.into(),
            name: "custom",
        })
    }

    /// The compiled header regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The chrono format of the timestamp field.
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Dialect name, or `"custom"`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl From<Dialect> for HeaderPattern {
    fn from(dialect: Dialect) -> Self {
        Self {
            regex: dialect.regex().clone(),
            timestamp_format: dialect.timestamp_format().to_string(),
            name: dialect.name(),
        }
    }
}

/// Auto-detect the dialect by scoring sample lines.
///
/// Only the first [`DETECTION_SAMPLE`] lines are inspected. A line scores for
/// a dialect when it starts with that dialect's header. The highest non-zero
/// score wins; ties go to the dialect listed first in [`Dialect::all`].
pub fn detect_dialect<S: AsRef<str>>(lines: &[S]) -> Option<Dialect> {
    let mut scores = [0usize; 2];

    for line in lines.iter().take(DETECTION_SAMPLE) {
        for (i, dialect) in Dialect::all().iter().enumerate() {
            if dialect.line_start_regex().is_match(line.as_ref()) {
                scores[i] += 1;
            }
        }
    }

    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(Dialect::all()[winner_idx])
}

/// Auto-detect the dialect from the beginning of a whole export.
pub fn detect_dialect_in(content: &str) -> Option<Dialect> {
    let sample: Vec<&str> = content.lines().take(DETECTION_SAMPLE).collect();
    detect_dialect(&sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_detect_french() {
        let lines = [
            "01/02/2016 à 15:30 - Alice: Hello",
            "01/02/2016 à 15:31 - Bob: Hi there",
        ];
        assert_eq!(detect_dialect(&lines), Some(Dialect::French));
    }

    #[test]
    fn test_detect_american() {
        let lines = [
            "2/1/16, 15:30 - Alice: Hello",
            "12/25/16, 09:05 - Bob: Merry Christmas",
        ];
        assert_eq!(detect_dialect(&lines), Some(Dialect::American));
    }

    #[test]
    fn test_detect_ignores_continuation_lines() {
        let lines = [
            "some preamble",
            "2/1/16, 15:30 - Alice: Hello",
            "second line of the same message",
        ];
        assert_eq!(detect_dialect(&lines), Some(Dialect::American));
    }

    #[test]
    fn test_detect_none() {
        let lines = ["[1/15/24, 10:30:45 AM] Alice: Hello", "plain text"];
        assert_eq!(detect_dialect(&lines), None);
        assert_eq!(detect_dialect::<&str>(&[]), None);
    }

    #[test]
    fn test_detect_only_looks_at_sample() {
        let mut lines = vec!["noise"; DETECTION_SAMPLE];
        lines.push("01/02/2016 à 15:30 - Alice: Hello");
        assert_eq!(detect_dialect(&lines), None);
    }

    #[test]
    fn test_detect_in_content() {
        let content = "01/02/2016 à 15:30 - Alice: Hello\n01/02/2016 à 15:31 - Bob: Hi\n";
        assert_eq!(detect_dialect_in(content), Some(Dialect::French));
    }

    #[test]
    fn test_timestamp_formats_parse_headers() {
        let fr =
            NaiveDateTime::parse_from_str("01/02/2016 à 15:30", Dialect::French.timestamp_format())
                .unwrap();
        assert_eq!(fr.to_string(), "2016-02-01 15:30:00");

        let us =
            NaiveDateTime::parse_from_str("2/1/16, 15:30", Dialect::American.timestamp_format())
                .unwrap();
        assert_eq!(us.to_string(), "2016-02-01 15:30:00");
    }

    #[test]
    fn test_header_pattern_from_dialect() {
        let header = HeaderPattern::from(Dialect::American);
        assert_eq!(header.name(), "American");
        assert!(header.regex().is_match("2/1/16, 15:30 - "));
        assert!(!header.regex().is_match("01/02/2016 à 15:30 - "));
    }

    #[test]
    fn test_custom_header_pattern() {
        let header = HeaderPattern::new(r"\d{2}\.\d{2}\.\d{4}, \d{2}:\d{2} - ", "%d.%m.%Y, %H:%M")
            .unwrap();
        assert_eq!(header.name(), "custom");
        assert!(header.regex().is_match("26.10.2025, 20:40 - "));
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = HeaderPattern::new("(unclosed", "%H").unwrap_err();
        assert!(matches!(err, ChatlensError::InvalidDialect { .. }));
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("fr".parse::<Dialect>().unwrap(), Dialect::French);
        assert_eq!("FRENCH".parse::<Dialect>().unwrap(), Dialect::French);
        assert_eq!("us".parse::<Dialect>().unwrap(), Dialect::American);
        assert!("ru".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_serde() {
        let json = serde_json::to_string(&Dialect::American).unwrap();
        assert_eq!(json, "\"american\"");
        let parsed: Dialect = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(parsed, Dialect::French);
    }
}
