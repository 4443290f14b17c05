//! Per-author activity distributions over hours, weekdays and months.
//!
//! Each author's row covers a fixed bucket domain, zero-filled, and is
//! normalized to percentages rounded to two decimals.

use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::{Conversation, Record};

/// Hour buckets in display order: the day starts at 7.
pub const HOUR_ORDER: [u32; 24] = [
    7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 0, 1, 2, 3, 4, 5, 6,
];

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One author's share of messages per bucket, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRow {
    pub author: String,
    pub percentages: Vec<f64>,
}

/// Author-by-bucket percentage table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub buckets: Vec<String>,
    pub rows: Vec<DistributionRow>,
}

impl Distribution {
    /// Row of `author`, if the author has messages.
    pub fn row(&self, author: &str) -> Option<&DistributionRow> {
        self.rows.iter().find(|row| row.author == author)
    }

    /// Percentage of `author` in the bucket labelled `bucket`.
    pub fn value(&self, author: &str, bucket: &str) -> Option<f64> {
        let column = self.buckets.iter().position(|b| b == bucket)?;
        self.row(author).map(|row| row.percentages[column])
    }
}

/// Share of each author's messages per hour of day, hours ordered 7..23, 0..6.
pub fn hourly_distribution(conversation: &Conversation) -> Distribution {
    let buckets = HOUR_ORDER.iter().map(ToString::to_string).collect();
    distribute(conversation, buckets, |r| {
        (r.timestamp.hour() as usize + 24 - 7) % 24
    })
}

/// Share of each author's messages per weekday, Monday first.
pub fn daily_distribution(conversation: &Conversation) -> Distribution {
    let buckets = WEEKDAYS.iter().map(ToString::to_string).collect();
    distribute(conversation, buckets, |r| {
        r.timestamp.weekday().num_days_from_monday() as usize
    })
}

/// Share of each author's messages per month, January first.
pub fn monthly_distribution(conversation: &Conversation) -> Distribution {
    let buckets = MONTHS.iter().map(ToString::to_string).collect();
    distribute(conversation, buckets, |r| r.timestamp.month0() as usize)
}

fn distribute(
    conversation: &Conversation,
    buckets: Vec<String>,
    bucket_of: impl Fn(&Record) -> usize,
) -> Distribution {
    let width = buckets.len();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, Vec<usize>)> = Vec::new();

    for record in conversation {
        let slot = *index.entry(record.author()).or_insert_with(|| {
            counts.push((record.author(), vec![0; width]));
            counts.len() - 1
        });
        counts[slot].1[bucket_of(record)] += 1;
    }

    let rows = counts
        .into_iter()
        .map(|(author, row)| {
            let total: usize = row.iter().sum();
            DistributionRow {
                author: author.to_string(),
                percentages: row.iter().map(|&n| percent(n, total)).collect(),
            }
        })
        .collect();

    Distribution { buckets, rows }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 10_000.0 / total as f64).round() / 100.0
}
