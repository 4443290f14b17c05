//! Filter records by date range and author.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Records from one author |
//!
//! # Example
//!
//! ```
//! use chatlens::filter::FilterConfig;
//! use chatlens::{Conversation, Record};
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlens::Result<()> {
//! let at = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let conv = Conversation::new(vec![
//!     Record::new(at(1), "Alice", "Old"),
//!     Record::new(at(15), "Alice", "New"),
//! ]);
//!
//! let config = FilterConfig::new().with_date_from("2024-06-10")?;
//! let recent = conv.filter(&config);
//! assert_eq!(recent.len(), 1);
//! assert_eq!(recent.records()[0].message, "New");
//! # Ok(())
//! # }
//! ```
//!
//! Filters are combined with AND logic. Author matching is exact: exports
//! spell a participant's name the same way every time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Record;
use crate::error::ChatlensError;

/// Configuration for filtering records by date and author.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this author.
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from midnight).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the date is not `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, through 23:59:59).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the date is not `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(date.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the author filter.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.author.is_some()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(ref author) = self.author {
            if record.author != *author {
                return false;
            }
        }
        if self.after.is_some_and(|after| record.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| record.timestamp > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Conversation;

    fn make(author: &str, message: &str, date: &str) -> Record {
        let ts = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Record::new(ts, author, message)
    }

    #[test]
    fn test_filter_by_author_is_exact() {
        let conv = Conversation::new(vec![
            make("Alice", "Hello", "2024-01-01"),
            make("Bob", "Hi", "2024-01-01"),
            make("alice", "Bye", "2024-01-01"),
        ]);

        let filtered = conv.filter(&FilterConfig::new().with_author("Alice"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].message, "Hello");
    }

    #[test]
    fn test_filter_by_date_after() {
        let conv = Conversation::new(vec![
            make("Alice", "Old", "2024-01-01"),
            make("Alice", "New", "2024-06-15"),
        ]);

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = conv.filter(&config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].message, "New");
    }

    #[test]
    fn test_filter_by_date_before_includes_whole_day() {
        let conv = Conversation::new(vec![
            make("Alice", "Old", "2024-01-01"),
            make("Alice", "New", "2024-06-15"),
        ]);

        let config = FilterConfig::new().with_date_to("2024-01-01").unwrap();
        let filtered = conv.filter(&config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].message, "Old");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatlensError::InvalidDate { .. })));
    }

    #[test]
    fn test_combined_filters() {
        let conv = Conversation::new(vec![
            make("Alice", "Old Alice", "2024-01-01"),
            make("Alice", "New Alice", "2024-06-15"),
            make("Bob", "New Bob", "2024-06-15"),
        ]);

        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_author("Alice");
        let filtered = conv.filter(&config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].message, "New Alice");
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_author("Alice").is_active());
        assert!(
            FilterConfig::new()
                .with_date_to("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
