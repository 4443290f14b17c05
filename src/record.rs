//! One parsed chat message.
//!
//! A [`Record`] is what the parser produces for every message unit that
//! survives filtering: when it was sent, who sent it and what it said.
//!
//! # Examples
//!
//! ```
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2016, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(15, 30, 0)
//!     .unwrap();
//! let record = Record::new(ts, "Alice", "Hello?");
//!
//! assert_eq!(record.author(), "Alice");
//! assert!(record.is_question());
//! assert!(!record.is_media("<Media omitted>"));
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single message of a conversation.
///
/// Timestamps are naive local times as written in the export; no timezone
/// is attached or inferred.
///
/// # Serialization
///
/// ```
/// use chatlens::Record;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// let json = serde_json::to_string(&Record::new(ts, "Bob", "Hi"))?;
/// assert!(json.contains("2024-01-15T10:30:00"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name (or phone number) of the author.
    pub author: String,

    /// Message body. May span several lines.
    pub message: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            message: message.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message length in characters.
    pub fn len(&self) -> usize {
        self.message.chars().count()
    }

    /// Returns `true` if the message body is empty.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    /// Returns `true` if the message contains at least one `?`.
    pub fn is_question(&self) -> bool {
        self.message.contains('?')
    }

    /// Returns `true` if the message is exactly the media placeholder.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.message == placeholder
    }
}
