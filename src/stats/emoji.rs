//! Emoji usage per author.
//!
//! A character counts when it is a complete emoji on its own. Multi-codepoint
//! sequences (flags, ZWJ families, skin tones) contribute their standalone
//! components, which keeps counting linear in the message length.

use std::collections::HashMap;

use serde::Serialize;

use super::Ranking;
use crate::Conversation;

/// Returns `true` if `c` is a complete emoji by itself.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Returns `true` if `text` holds at least one emoji character.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// How many times one author used one emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub author: String,
    pub emoji: char,
    pub count: usize,
}

/// `(author, emoji, count)` for every emoji an author used, sorted
/// descending by count; ties keep the order of first occurrence.
pub fn emoji_counts(conversation: &Conversation) -> Vec<EmojiCount> {
    let mut index: HashMap<(&str, char), usize> = HashMap::new();
    let mut counts: Vec<EmojiCount> = Vec::new();

    for record in conversation {
        for emoji in record.message().chars().filter(|c| is_emoji(*c)) {
            let slot = *index.entry((record.author(), emoji)).or_insert_with(|| {
                counts.push(EmojiCount {
                    author: record.author.clone(),
                    emoji,
                    count: 0,
                });
                counts.len() - 1
            });
            counts[slot].count += 1;
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Usage of each emoji across all authors, most used first.
pub fn emoji_totals(conversation: &Conversation) -> Vec<(char, usize)> {
    let mut totals: Vec<(char, usize)> = Vec::new();
    for entry in emoji_counts(conversation) {
        match totals.iter_mut().find(|(emoji, _)| *emoji == entry.emoji) {
            Some((_, total)) => *total += entry.count,
            None => totals.push((entry.emoji, entry.count)),
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

/// Fraction (0..=1) of each author's messages holding at least one emoji,
/// sorted descending.
pub fn percent_messages_with_emoji(conversation: &Conversation) -> Ranking<f64> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(String, usize, usize)> = Vec::new();

    for record in conversation {
        let slot = *index.entry(record.author()).or_insert_with(|| {
            tallies.push((record.author.clone(), 0, 0));
            tallies.len() - 1
        });
        let (_, total, with_emoji) = &mut tallies[slot];
        *total += 1;
        if contains_emoji(record.message()) {
            *with_emoji += 1;
        }
    }

    Ranking::descending(
        tallies
            .into_iter()
            .map(|(author, total, with_emoji)| (author, with_emoji as f64 / total as f64))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use chrono::NaiveDate;

    fn conv(messages: &[(&str, &str)]) -> Conversation {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        messages
            .iter()
            .map(|(author, message)| Record::new(ts, *author, *message))
            .collect()
    }

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😀'));
        assert!(is_emoji('🎉'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('?'));
        assert!(!is_emoji('é'));
    }

    #[test]
    fn test_emoji_counts_sorted() {
        let c = conv(&[
            ("Alice", "hi 😀"),
            ("Bob", "🎉🎉 party"),
            ("Alice", "😀 again 🎉"),
        ]);
        let counts = emoji_counts(&c);
        assert_eq!(counts.len(), 3);
        assert_eq!((counts[0].author.as_str(), counts[0].emoji, counts[0].count), ("Alice", '😀', 2));
        assert_eq!((counts[1].author.as_str(), counts[1].emoji, counts[1].count), ("Bob", '🎉', 2));
        assert_eq!((counts[2].author.as_str(), counts[2].emoji, counts[2].count), ("Alice", '🎉', 1));
    }

    #[test]
    fn test_emoji_totals() {
        let c = conv(&[("Alice", "😀🎉"), ("Bob", "🎉")]);
        assert_eq!(emoji_totals(&c), vec![('🎉', 2), ('😀', 1)]);
    }

    #[test]
    fn test_percent_messages_with_emoji() {
        let c = conv(&[
            ("Alice", "plain"),
            ("Alice", "fun 😀"),
            ("Bob", "🎉"),
            ("Carol", "nothing"),
        ]);
        let share = percent_messages_with_emoji(&c);
        assert_eq!(share.authors(), vec!["Bob", "Alice", "Carol"]);
        assert_eq!(share.get("Alice"), Some(&0.5));
        assert_eq!(share.get("Carol"), Some(&0.0));
    }
}
