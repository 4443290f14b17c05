//! Statistics over a parsed conversation.
//!
//! Every function here is a pure read of a [`Conversation`](crate::Conversation)
//! and may run in any order.
//!
//! | Module | Functions |
//! |--------|-----------|
//! | [`summary`] | [`basic_info`] |
//! | [`authors`] | question, message, length, silence and media rankings |
//! | [`timeline`] | [`messages_per_day`], [`moving_weekly_message_count`] |
//! | [`distribution`] | hourly, daily and monthly activity tables |
//! | [`emoji`] | [`emoji_counts`], [`percent_messages_with_emoji`] |
//!
//! # Example
//!
//! ```
//! use chatlens::stats::{message_count_by_author, question_count_by_author};
//! use chatlens::{Conversation, Record};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let conv = Conversation::new(vec![
//!     Record::new(ts, "Alice", "Coffee?"),
//!     Record::new(ts, "Bob", "Sure"),
//!     Record::new(ts, "Bob", "Where"),
//! ]);
//!
//! assert_eq!(message_count_by_author(&conv).authors(), vec!["Bob", "Alice"]);
//! assert_eq!(question_count_by_author(&conv).get("Alice"), Some(&1));
//! ```

pub mod authors;
pub mod distribution;
pub mod emoji;
mod ranking;
pub mod summary;
pub mod timeline;

pub use authors::{
    BURST_WINDOW_MINUTES, MediaInterval, max_silence_by_author, mean_media_interval_by_author,
    mean_media_interval_within, mean_message_length_by_author, message_count_by_author,
    question_count_by_author,
};
pub use distribution::{
    Distribution, DistributionRow, daily_distribution, hourly_distribution, monthly_distribution,
};
pub use emoji::{
    EmojiCount, contains_emoji, emoji_counts, emoji_totals, is_emoji, percent_messages_with_emoji,
};
pub use ranking::Ranking;
pub use summary::{BasicInfo, basic_info};
pub use timeline::{
    AuthorSeries, DailyCount, fill_missing_days, messages_per_day, moving_message_count,
    moving_message_count_by_author, moving_weekly_message_count,
    moving_weekly_message_count_by_author,
};

use chrono::TimeDelta;

/// Formats a duration as `"3d 4h 05m"`, dropping leading zero units.
pub fn format_duration(delta: TimeDelta) -> String {
    let minutes = delta.num_minutes().max(0);
    let (days, hours, mins) = (minutes / 1440, (minutes % 1440) / 60, minutes % 60);
    match (days, hours) {
        (0, 0) => format!("{mins}m"),
        (0, _) => format!("{hours}h {mins:02}m"),
        _ => format!("{days}d {hours}h {mins:02}m"),
    }
}
