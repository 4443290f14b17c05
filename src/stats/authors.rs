//! Per-author statistics.
//!
//! Every function makes a single pass over the conversation, keeping one
//! running tally per author. Authors appear in the result even when their
//! value is zero, and rankings break ties by first-seen author order.

use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::Ranking;
use crate::{Conversation, Record};

/// Media gaps at or below this many minutes are one burst-send.
pub const BURST_WINDOW_MINUTES: i64 = 30;

/// Running aggregate for one author.
#[derive(Debug, Default)]
struct Tally {
    messages: usize,
    questions: usize,
    chars: usize,
    last_seen: Option<NaiveDateTime>,
    max_silence: TimeDelta,
}

/// One pass over the records, tallies in first-seen author order.
fn tally(conversation: &Conversation) -> Vec<(String, Tally)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(String, Tally)> = Vec::new();

    for record in conversation {
        let slot = *index.entry(record.author()).or_insert_with(|| {
            tallies.push((record.author.clone(), Tally::default()));
            tallies.len() - 1
        });
        let tally = &mut tallies[slot].1;

        tally.messages += 1;
        tally.chars += record.len();
        if record.is_question() {
            tally.questions += 1;
        }
        if let Some(previous) = tally.last_seen {
            tally.max_silence = tally.max_silence.max(record.timestamp - previous);
        }
        tally.last_seen = Some(record.timestamp);
    }

    tallies
}

fn rank_by<T: PartialOrd>(conversation: &Conversation, value: impl Fn(&Tally) -> T) -> Ranking<T> {
    Ranking::descending(
        tally(conversation)
            .into_iter()
            .map(|(author, t)| {
                let v = value(&t);
                (author, v)
            })
            .collect(),
    )
}

/// Number of messages containing a `?`, per author.
pub fn question_count_by_author(conversation: &Conversation) -> Ranking<usize> {
    rank_by(conversation, |t| t.questions)
}

/// Number of messages per author.
pub fn message_count_by_author(conversation: &Conversation) -> Ranking<usize> {
    rank_by(conversation, |t| t.messages)
}

/// Mean message length in characters, per author.
pub fn mean_message_length_by_author(conversation: &Conversation) -> Ranking<f64> {
    rank_by(conversation, |t| t.chars as f64 / t.messages as f64)
}

/// Longest gap between two consecutive messages of the same author.
///
/// An author's first message has no predecessor and counts as a zero gap,
/// so single-message authors get zero.
pub fn max_silence_by_author(conversation: &Conversation) -> Ranking<TimeDelta> {
    rank_by(conversation, |t| t.max_silence)
}

/// Average time between two media sends of one author, rounded to hours.
///
/// `Undefined` when the author sent no media or no gap survives the burst
/// filter. Derived ordering puts every `Hours` value before `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaInterval {
    /// Mean interval in whole hours.
    Hours(i64),
    /// No retained interval to average.
    Undefined,
}

impl MediaInterval {
    /// Whole hours, or `None` if undefined.
    pub fn as_hours(self) -> Option<i64> {
        match self {
            MediaInterval::Hours(h) => Some(h),
            MediaInterval::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, MediaInterval::Hours(_))
    }
}

impl std::fmt::Display for MediaInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaInterval::Hours(h) => write!(f, "{h}h"),
            MediaInterval::Undefined => write!(f, "undefined"),
        }
    }
}

/// Mean media interval per author with the default 30-minute burst window.
pub fn mean_media_interval_by_author(
    conversation: &Conversation,
    media_placeholder: &str,
) -> Ranking<MediaInterval> {
    mean_media_interval_within(
        conversation,
        media_placeholder,
        TimeDelta::minutes(BURST_WINDOW_MINUTES),
    )
}

/// Mean media interval per author, sorted ascending (undefined last).
///
/// Each author's media timestamps are bounded by the first and last record
/// of the whole conversation. Gaps at or below `burst_window` are discarded
/// as one burst-send; the remaining gaps are averaged and rounded to hours.
/// Authors without media are `Undefined`.
pub fn mean_media_interval_within(
    conversation: &Conversation,
    media_placeholder: &str,
    burst_window: TimeDelta,
) -> Ranking<MediaInterval> {
    let (Some(first), Some(last)) = (conversation.first(), conversation.last()) else {
        return Ranking::ascending(Vec::new());
    };

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut media: Vec<(String, Vec<NaiveDateTime>)> = Vec::new();
    for record in conversation {
        let slot = *index.entry(record.author()).or_insert_with(|| {
            media.push((record.author.clone(), Vec::new()));
            media.len() - 1
        });
        if record.is_media(media_placeholder) {
            media[slot].1.push(record.timestamp);
        }
    }

    let entries = media
        .into_iter()
        .map(|(author, sends)| {
            let interval = mean_interval(first, &sends, last, burst_window);
            (author, interval)
        })
        .collect();
    Ranking::ascending(entries)
}

fn mean_interval(
    first: &Record,
    sends: &[NaiveDateTime],
    last: &Record,
    burst_window: TimeDelta,
) -> MediaInterval {
    if sends.is_empty() {
        return MediaInterval::Undefined;
    }
    let mut bounded = Vec::with_capacity(sends.len() + 2);
    bounded.push(first.timestamp);
    bounded.extend_from_slice(sends);
    bounded.push(last.timestamp);

    let kept: Vec<i64> = bounded
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|gap| *gap > burst_window)
        .map(|gap| gap.num_seconds())
        .collect();

    if kept.is_empty() {
        return MediaInterval::Undefined;
    }
    let mean_seconds = kept.iter().sum::<i64>() as f64 / kept.len() as f64;
    MediaInterval::Hours((mean_seconds / 3600.0).round_ties_even() as i64)
}
