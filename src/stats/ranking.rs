//! Ordered author -> value mappings.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};

/// An author -> value mapping with a defined order.
///
/// Built from entries in first-seen author order and then stably sorted, so
/// ties keep first-seen order. Serializes as a JSON object in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<T> {
    entries: Vec<(String, T)>,
}

impl<T> Ranking<T> {
    /// Sorts descending by value, ties keep their input order.
    pub fn descending(entries: Vec<(String, T)>) -> Self
    where
        T: PartialOrd,
    {
        Self::sorted_by(entries, |a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
    }

    /// Sorts ascending by value, ties keep their input order.
    pub fn ascending(entries: Vec<(String, T)>) -> Self
    where
        T: PartialOrd,
    {
        Self::sorted_by(entries, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    fn sorted_by(mut entries: Vec<(String, T)>, cmp: impl Fn(&T, &T) -> Ordering) -> Self {
        entries.sort_by(|a, b| cmp(&a.1, &b.1));
        Self { entries }
    }

    /// Value for `author`, if present.
    pub fn get(&self, author: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| name == author)
            .map(|(_, value)| value)
    }

    /// Entries in ranking order.
    pub fn entries(&self) -> &[(String, T)] {
        &self.entries
    }

    /// Iterates `(author, value)` pairs in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Authors in ranking order.
    pub fn authors(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// The first `n` entries.
    pub fn top(&self, n: usize) -> &[(String, T)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts every value, keeping the order.
    pub fn map_values<U>(&self, f: impl Fn(&T) -> U) -> Ranking<U> {
        Ranking {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), f(value)))
                .collect(),
        }
    }
}

impl<T: Serialize> Serialize for Ranking<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, value)| (name, value)))
    }
}
