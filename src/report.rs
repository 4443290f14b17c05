//! Every statistic of a conversation, bundled for presentation.
//!
//! # Example
//!
//! ```
//! use chatlens::config::AnalysisConfig;
//! use chatlens::parser::parse;
//! use chatlens::dialect::{Dialect, HeaderPattern};
//! use chatlens::report::Report;
//!
//! # fn main() -> chatlens::Result<()> {
//! let text = "01/02/2016 à 15:30 - Alice: Hello\n01/02/2016 à 15:31 - Bob: Hi?\n";
//! let conv = parse(text, &HeaderPattern::from(Dialect::French))?;
//!
//! let report = Report::build(&conv, &AnalysisConfig::default())?;
//! assert_eq!(report.info.message_count, 2);
//! assert_eq!(report.info.author_count, 2);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::Conversation;
use crate::config::AnalysisConfig;
use crate::error::ChatlensError;
use crate::stats::{
    self, AuthorSeries, BasicInfo, DailyCount, Distribution, EmojiCount, MediaInterval, Ranking,
};

/// Aggregated statistics of one conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub info: BasicInfo,
    pub questions: Ranking<usize>,
    pub messages: Ranking<usize>,
    pub mean_message_length: Ranking<f64>,
    /// Longest silence per author, in minutes.
    pub max_silence_minutes: Ranking<i64>,
    pub media_interval: Ranking<MediaInterval>,
    pub weekly_activity: Vec<DailyCount>,
    pub weekly_activity_by_author: Vec<AuthorSeries>,
    pub hourly: Distribution,
    pub daily: Distribution,
    pub monthly: Distribution,
    pub emoji: Vec<EmojiCount>,
    pub emoji_share: Ranking<f64>,
}

impl Report {
    /// Runs every aggregation over `conversation`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::EmptyConversation`] if there are no records.
    pub fn build(conversation: &Conversation, config: &AnalysisConfig) -> Result<Self, ChatlensError> {
        let placeholder = config.media_placeholder.as_str();
        let info =
            stats::basic_info(conversation, placeholder).ok_or(ChatlensError::EmptyConversation)?;

        let window = config.rolling_window_days;
        let report = Self {
            info,
            questions: stats::question_count_by_author(conversation),
            messages: stats::message_count_by_author(conversation),
            mean_message_length: stats::mean_message_length_by_author(conversation),
            max_silence_minutes: stats::max_silence_by_author(conversation)
                .map_values(|d| d.num_minutes()),
            media_interval: stats::mean_media_interval_within(
                conversation,
                placeholder,
                config.burst_window(),
            ),
            weekly_activity: stats::moving_message_count(conversation, window),
            weekly_activity_by_author: stats::moving_message_count_by_author(conversation, window),
            hourly: stats::hourly_distribution(conversation),
            daily: stats::daily_distribution(conversation),
            monthly: stats::monthly_distribution(conversation),
            emoji: stats::emoji_counts(conversation),
            emoji_share: stats::percent_messages_with_emoji(conversation),
        };

        debug!(
            messages = report.info.message_count,
            authors = report.info.author_count,
            days = report.weekly_activity.len(),
            "Built report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use chrono::NaiveDate;

    fn sample() -> Conversation {
        let at = |d, h, m| {
            NaiveDate::from_ymd_opt(2024, 4, d)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap()
        };
        Conversation::new(vec![
            Record::new(at(1, 9, 0), "Alice", "Morning? 😀"),
            Record::new(at(1, 9, 5), "Bob", "<Media omitted>"),
            Record::new(at(3, 21, 0), "Alice", "Night"),
        ])
    }

    #[test]
    fn test_build() {
        let report = Report::build(&sample(), &AnalysisConfig::default()).unwrap();
        assert_eq!(report.info.message_count, 3);
        assert_eq!(report.info.media_count, 1);
        assert_eq!(report.questions.get("Alice"), Some(&1));
        assert_eq!(report.messages.authors(), vec!["Alice", "Bob"]);
        assert_eq!(report.max_silence_minutes.get("Alice"), Some(&(2 * 1440 + 12 * 60)));
        assert_eq!(report.weekly_activity.len(), 3);
        assert_eq!(report.emoji.len(), 1);
    }

    #[test]
    fn test_build_respects_rolling_window() {
        let config = AnalysisConfig::default().with_rolling_window_days(1);
        let report = Report::build(&sample(), &config).unwrap();
        let counts: Vec<usize> = report.weekly_activity.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![2, 0, 1]);
    }

    #[test]
    fn test_build_empty_fails() {
        let err = Report::build(&Conversation::default(), &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, ChatlensError::EmptyConversation));
    }

    #[test]
    fn test_report_serializes() {
        let report = Report::build(&sample(), &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["info"]["message_count"], 3);
        assert_eq!(json["messages"]["Alice"], 2);
        assert!(json["hourly"]["buckets"].is_array());
    }
}
