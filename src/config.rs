//! Configuration types for analysis.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`Language`] - maps an export language to its media placeholder
//! - [`AnalysisConfig`] - everything the aggregations need besides the records
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, Language};
//!
//! let config = AnalysisConfig::for_language(Language::French)
//!     .with_burst_window_minutes(15);
//!
//! assert_eq!(config.media_placeholder, "<Médias omis>");
//! ```

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Language of an export.
///
/// Detecting the language is left to the caller; this only maps a known
/// language to the literal an export writes in place of an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English exports: `<Media omitted>`
    #[default]
    #[serde(alias = "en")]
    English,
    /// French exports: `<Médias omis>`
    #[serde(alias = "fr")]
    French,
}

impl Language {
    /// The media placeholder written by exports in this language.
    pub fn media_placeholder(self) -> &'static str {
        match self {
            Language::English => "<Media omitted>",
            Language::French => "<Médias omis>",
        }
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["english", "en", "french", "fr"]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::French => write!(f, "French"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "french" | "fr" => Ok(Language::French),
            _ => Err(format!(
                "Unknown language: '{}'. Expected one of: {}",
                s,
                Language::all_names().join(", ")
            )),
        }
    }
}

/// Settings shared by the aggregations.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_media_placeholder("<attached>")
///     .with_rolling_window_days(14);
/// assert_eq!(config.rolling_window_days, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Literal message body marking an omitted attachment (default: English)
    pub media_placeholder: String,

    /// Media gaps at or below this many minutes count as one burst (default: 30)
    pub burst_window_minutes: i64,

    /// Width of the rolling message count, in days (default: 7)
    pub rolling_window_days: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: Language::default().media_placeholder().to_string(),
            burst_window_minutes: 30,
            rolling_window_days: 7,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration using the placeholder of `language`.
    pub fn for_language(language: Language) -> Self {
        Self::default().with_media_placeholder(language.media_placeholder())
    }

    /// Sets the media placeholder.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the burst window, in minutes.
    #[must_use]
    pub fn with_burst_window_minutes(mut self, minutes: i64) -> Self {
        self.burst_window_minutes = minutes;
        self
    }

    /// Sets the rolling window width, in days. Zero is treated as one.
    #[must_use]
    pub fn with_rolling_window_days(mut self, days: usize) -> Self {
        self.rolling_window_days = days.max(1);
        self
    }

    /// The burst window as a duration.
    pub fn burst_window(&self) -> TimeDelta {
        TimeDelta::minutes(self.burst_window_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.burst_window_minutes, 30);
        assert_eq!(config.rolling_window_days, 7);
        assert_eq!(config.burst_window(), TimeDelta::minutes(30));
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_media_placeholder("<x>")
            .with_burst_window_minutes(5)
            .with_rolling_window_days(0);

        assert_eq!(config.media_placeholder, "<x>");
        assert_eq!(config.burst_window_minutes, 5);
        assert_eq!(config.rolling_window_days, 1);
    }

    #[test]
    fn test_for_language() {
        let config = AnalysisConfig::for_language(Language::French);
        assert_eq!(config.media_placeholder, "<Médias omis>");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("fr".parse::<Language>().unwrap(), Language::French);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_config_serde() {
        let json = serde_json::to_string(&AnalysisConfig::default()).unwrap();
        assert!(json.contains("\"burst_window_minutes\":30"));
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, AnalysisConfig::default());
    }
}
