//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing descriptive
//! statistics over them.
//!
//! ## Overview
//!
//! An export is a plain-text file where every message starts with a date
//! header. Chatlens recovers message boundaries from that header alone, then
//! splits each message into timestamp, author and body. Two header dialects
//! are built in:
//! - **French** - `01/02/2016 à 15:30 - Alice: Hello`
//! - **American** - `2/1/16, 15:30 - Alice: Hello`
//!
//! On top of the parsed [`Conversation`] the [`stats`] module computes message
//! counts, silences, emoji usage, hourly/daily/monthly distributions, a
//! rolling weekly activity series and mean media intervals.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = "01/02/2016 à 15:30 - Alice: Hello\n01/02/2016 à 15:31 - Bob: Hi?\n";
//!     let conversation = ExportParser::new(Dialect::French).parse_str(raw)?;
//!
//!     let counts = message_count_by_author(&conversation);
//!     assert_eq!(counts.get("Alice"), Some(&1));
//!
//!     let report = Report::build(&conversation, &AnalysisConfig::default())?;
//!     assert_eq!(report.info.author_count, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`dialect`] - [`Dialect`](dialect::Dialect), [`HeaderPattern`](dialect::HeaderPattern), auto-detection
//! - [`parser`] - [`parse`](parser::parse), [`ExportParser`](parser::ExportParser)
//! - [`record`] / [`conversation`] - [`Record`], [`Conversation`]
//! - [`filter`] - [`FilterConfig`](filter::FilterConfig)
//! - [`stats`] - every aggregation, returning [`Ranking`](stats::Ranking)s and small tables
//! - [`report`] - [`Report`](report::Report), all statistics in one serializable value
//! - [`output`] - [`OutputFormat`](output::OutputFormat) and the JSON / CSV writers
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), [`Language`](config::Language)
//! - [`cli`] - clap arguments for the `chatlens` binary (feature `cli`)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod output;
pub mod parser;
pub mod record;
pub mod report;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use conversation::Conversation;
pub use error::{ChatlensError, Result};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Conversation, Record};

    // Error types
    pub use crate::error::{ChatlensError, ParseErrorKind, Result};

    // Parsing
    pub use crate::dialect::{Dialect, HeaderPattern, detect_dialect};
    pub use crate::parser::{ExportParser, parse};

    // Configuration and filtering
    pub use crate::config::{AnalysisConfig, Language};
    pub use crate::filter::FilterConfig;

    // Statistics
    pub use crate::report::Report;
    pub use crate::stats::{
        BasicInfo, MediaInterval, Ranking, basic_info, emoji_counts, hourly_distribution,
        max_silence_by_author, mean_media_interval_by_author, mean_message_length_by_author,
        message_count_by_author, moving_weekly_message_count, percent_messages_with_emoji,
        question_count_by_author,
    };

    // Output
    pub use crate::output::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
