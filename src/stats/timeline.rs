//! Per-day message counts and the rolling weekly activity series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::Conversation;

/// Width of the weekly rolling window.
pub const WEEK_DAYS: usize = 7;

/// Message count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

impl DailyCount {
    pub fn new(date: NaiveDate, count: usize) -> Self {
        Self { date, count }
    }
}

/// Rolling series for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSeries {
    pub author: String,
    pub series: Vec<DailyCount>,
}

/// Messages per calendar day, only for days that have messages.
pub fn messages_per_day(conversation: &Conversation) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in conversation {
        *days.entry(record.date()).or_insert(0) += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyCount::new(date, count))
        .collect()
}

/// Expands a sorted sparse series to every day between its first and last
/// date, with zero for the days that were absent.
pub fn fill_missing_days(sparse: &[DailyCount]) -> Vec<DailyCount> {
    let (Some(first), Some(last)) = (sparse.first(), sparse.last()) else {
        return Vec::new();
    };

    let mut dense = Vec::new();
    let mut known = sparse.iter().peekable();
    for date in first.date.iter_days().take_while(|d| *d <= last.date) {
        let count = known.next_if(|d| d.date == date).map_or(0, |d| d.count);
        dense.push(DailyCount::new(date, count));
    }
    dense
}

/// Trailing sum over `window` days (current day included) of the dense
/// per-day series. Days before the first one count as zero.
pub fn moving_message_count(conversation: &Conversation, window: usize) -> Vec<DailyCount> {
    let dense = fill_missing_days(&messages_per_day(conversation));
    let window = window.max(1);

    let mut rolling = Vec::with_capacity(dense.len());
    let mut sum = 0usize;
    for (i, day) in dense.iter().enumerate() {
        sum += day.count;
        if i >= window {
            sum -= dense[i - window].count;
        }
        rolling.push(DailyCount::new(day.date, sum));
    }

    debug!(days = rolling.len(), window, "Computed rolling message count");
    rolling
}

/// Messages over the last seven days, for every day of the conversation.
pub fn moving_weekly_message_count(conversation: &Conversation) -> Vec<DailyCount> {
    moving_message_count(conversation, WEEK_DAYS)
}

/// The weekly rolling series of each author, over that author's own days.
pub fn moving_weekly_message_count_by_author(conversation: &Conversation) -> Vec<AuthorSeries> {
    moving_message_count_by_author(conversation, WEEK_DAYS)
}

/// Rolling series of each author with a custom window, in first-seen order.
pub fn moving_message_count_by_author(
    conversation: &Conversation,
    window: usize,
) -> Vec<AuthorSeries> {
    conversation
        .authors()
        .into_iter()
        .map(|author| {
            let own: Conversation = conversation.by_author(author).cloned().collect();
            AuthorSeries {
                author: author.to_string(),
                series: moving_message_count(&own, window),
            }
        })
        .collect()
}
