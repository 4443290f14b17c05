//! An immutable, ordered sequence of records.
//!
//! A [`Conversation`] is created once per export. Aggregations borrow it
//! read-only; filtering derives a new conversation instead of mutating.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::Record;
use crate::filter::FilterConfig;

/// Parsed conversation, in export order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    records: Vec<Record>,
}

impl Conversation {
    /// Wraps an ordered list of records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// All records, in export order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first record in export order.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// The last record in export order.
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Earliest and latest timestamps.
    ///
    /// Computed as min/max rather than first/last, since export order is
    /// trusted but not verified.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut iter = self.records.iter().map(Record::timestamp);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts))))
    }

    /// Distinct authors in first-seen order.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.author()) {
                seen.push(record.author());
            }
        }
        seen
    }

    /// Records sent by one author, in order.
    pub fn by_author<'a>(&'a self, author: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.author == author)
    }

    /// Derives a new conversation holding only the records matching `config`.
    pub fn filter(&self, config: &FilterConfig) -> Conversation {
        if !config.is_active() {
            return self.clone();
        }
        Conversation::new(
            self.records
                .iter()
                .filter(|r| config.matches(r))
                .cloned()
                .collect(),
        )
    }

    /// Consumes the conversation and returns its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Conversation {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Conversation {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
