//! Text-to-record parser for chat exports.
//!
//! Message boundaries are recovered using nothing but the header pattern:
//! every header match starts a new unit, and everything up to the next match
//! (continuation lines included) belongs to it.
//!
//! # Pipeline
//!
//! 1. [`join_lines`]: physical lines keep their `\n` and are joined with a
//!    single space.
//! 2. [`split_units`]: cut the joined text at every header match; text before
//!    the first header is discarded.
//! 3. [`is_message`]: units without a `-` followed by a `:` on one line are
//!    dropped silently (system notices, header-only lines).
//! 4. [`split_unit`]: split timestamp / author / body and apply the fixed
//!    two-character trailing trim. Structure problems are hard errors.
//! 5. The timestamp field is parsed with the dialect's format.
//!
//! # Example
//!
//! ```rust
//! use chatlens::dialect::Dialect;
//! use chatlens::parser::ExportParser;
//!
//! let raw = "01/02/2016 à 15:30 - Alice: Hello\n01/02/2016 à 15:31 - Bob: Hi?\n";
//! let conversation = ExportParser::new(Dialect::French).parse_str(raw)?;
//!
//! assert_eq!(conversation.len(), 2);
//! assert_eq!(conversation.records()[0].message, "Hello");
//! // The last line has no trailing " " from the join, so the fixed
//! // two-character trim eats "?\n".
//! assert_eq!(conversation.records()[1].message, "Hi");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Sharp edge
//!
//! The trailing trim removes exactly two characters, which matches the
//! `"\n "` left by the join for every message except the final one of a
//! file. It is tied to the two supported dialects and export versions.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{debug, info};

use crate::dialect::{Dialect, HeaderPattern, detect_dialect_in};
use crate::error::{ChatlensError, ParseErrorKind};
use crate::{Conversation, Record};

/// Parse raw export text with the given header pattern.
///
/// # Errors
///
/// - [`ParseErrorKind::NoHeaderMatch`] if the pattern never matches
/// - [`ParseErrorKind::MalformedMessage`] if a unit passes [`is_message`] but
///   cannot be split into author and message
///
/// Units whose message is empty once trimmed (a one-character final message)
/// are dropped like system notices.
/// - [`ParseErrorKind::BadTimestamp`] if a timestamp field does not parse
pub fn parse(raw_text: &str, header: &HeaderPattern) -> Result<Conversation, ChatlensError> {
    let fail = |kind| ChatlensError::parse(header.name(), kind, None);

    let text = join_lines(raw_text);
    let units = split_units(&text, header.regex());
    if units.is_empty() {
        return Err(fail(ParseErrorKind::NoHeaderMatch));
    }

    let mut records = Vec::with_capacity(units.len());
    let mut dropped = 0usize;

    for unit in &units {
        if !is_message(unit) {
            dropped += 1;
            debug!(unit = %unit.trim_end(), "dropping unit without author");
            continue;
        }

        let (field, author, message) = split_unit(unit).map_err(fail)?;
        let timestamp = NaiveDateTime::parse_from_str(field, header.timestamp_format())
            .map_err(|source| {
                fail(ParseErrorKind::BadTimestamp {
                    value: field.to_string(),
                    format: header.timestamp_format().to_string(),
                    source,
                })
            })?;

        if message.is_empty() {
            dropped += 1;
            debug!(unit = %unit.trim_end(), "dropping unit with empty message");
            continue;
        }
        records.push(Record::new(timestamp, author, message));
    }

    info!(
        dialect = header.name(),
        units = units.len(),
        records = records.len(),
        dropped,
        "parsed export"
    );
    Ok(Conversation::new(records))
}

/// Joins physical lines the way the statistics expect.
///
/// Every line keeps its `\n` terminator and lines are joined with one space,
/// so a message followed by another message ends in `"\n "`. Windows line
/// endings are normalized to `\n` first.
pub fn join_lines(raw: &str) -> String {
    let normalized;
    let raw = if raw.contains("\r\n") {
        normalized = raw.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        raw
    };
    raw.split_inclusive('\n').collect::<Vec<_>>().join(" ")
}

/// Cuts `text` into `header + body` units at every header match.
///
/// Text before the first match is discarded. Empty matches are ignored.
pub fn split_units<'a>(text: &'a str, header: &Regex) -> Vec<&'a str> {
    let starts: Vec<usize> = header
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}

/// Heuristic pre-filter: some line of the unit has a `-` followed later by a `:`.
///
/// Units failing this are not messages (e.g. "Alice joined using this
/// group's invite link") and are dropped without an error.
pub fn is_message(unit: &str) -> bool {
    unit.split('\n').any(|line| match (line.find('-'), line.rfind(':')) {
        (Some(dash), Some(colon)) => dash < colon,
        _ => false,
    })
}

/// Splits a unit into `(timestamp field, author, message)`.
///
/// Both splits use the first occurrence of their separator (`" - "`, then
/// `": "`), so authors and messages may contain either later on. The message
/// loses exactly its last two characters.
///
/// # Errors
///
/// [`ParseErrorKind::MalformedMessage`] if a separator is missing or the
/// author is blank. The message may come back empty.
pub fn split_unit(unit: &str) -> Result<(&str, &str, &str), ParseErrorKind> {
    let malformed = || ParseErrorKind::MalformedMessage(unit.to_string());

    let (field, rest) = unit.split_once(" - ").ok_or_else(malformed)?;
    let (author, body) = rest.split_once(": ").ok_or_else(malformed)?;
    let message = trim_tail(body);

    if author.trim().is_empty() {
        return Err(malformed());
    }
    Ok((field, author, message))
}

/// Drops the last two characters (not bytes).
fn trim_tail(body: &str) -> &str {
    match body.char_indices().rev().nth(1) {
        Some((idx, _)) => &body[..idx],
        None => "",
    }
}

/// Reads an export file as UTF-8.
pub fn read_export(path: &Path) -> Result<String, ChatlensError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
        context: format!("reading {}", path.display()),
        source,
    })
}

/// A parser bound to one header pattern.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::dialect::Dialect;
/// use chatlens::parser::ExportParser;
///
/// let parser = ExportParser::new(Dialect::American);
/// let conversation = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExportParser {
    header: HeaderPattern,
}

impl ExportParser {
    /// Creates a parser for a built-in dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            header: HeaderPattern::from(dialect),
        }
    }

    /// Creates a parser for a custom header pattern.
    pub fn with_header(header: HeaderPattern) -> Self {
        Self { header }
    }

    /// Creates a parser for whichever dialect the content's first lines match.
    ///
    /// # Errors
    ///
    /// [`ParseErrorKind::NoHeaderMatch`] if no dialect matches.
    pub fn detect(content: &str) -> Result<Self, ChatlensError> {
        let dialect = detect_dialect_in(content).ok_or_else(|| {
            ChatlensError::parse("auto-detected", ParseErrorKind::NoHeaderMatch, None)
        })?;
        debug!(%dialect, "detected dialect");
        Ok(Self::new(dialect))
    }

    /// Returns the header pattern in use.
    pub fn header(&self) -> &HeaderPattern {
        &self.header
    }

    /// Parses export content held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Conversation, ChatlensError> {
        parse(content, &self.header)
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Conversation, ChatlensError> {
        let content = read_export(path)?;
        self.parse_str(&content).map_err(|e| e.with_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn french() -> HeaderPattern {
        HeaderPattern::from(Dialect::French)
    }

    #[test]
    fn test_join_lines_keeps_terminators() {
        assert_eq!(join_lines("a\nb\nc"), "a\n b\n c");
        assert_eq!(join_lines("a\r\nb\r\n"), "a\n b\n");
        assert_eq!(join_lines(""), "");
    }

    #[test]
    fn test_split_units_discards_preamble() {
        let text = "preamble 01/02/2016 à 15:30 - A: x\n 01/02/2016 à 15:31 - B: y\n";
        let units = split_units(text, french().regex());
        assert_eq!(
            units,
            vec!["01/02/2016 à 15:30 - A: x\n ", "01/02/2016 à 15:31 - B: y\n"]
        );
    }

    #[test]
    fn test_is_message() {
        assert!(is_message("01/02/2016 à 15:30 - Alice: Hello\n "));
        assert!(!is_message("01/02/2016 à 15:30 - Alice joined\n "));
        // ':' must come after a '-' on the same line
        assert!(!is_message("01/02/2016 à 15:30 - Alice joined\n and: more"));
        assert!(!is_message("no dash here: at all"));
    }

    #[test]
    fn test_split_unit_first_occurrences() {
        let (field, author, message) =
            split_unit("01/02/2016 à 15:30 - Alice: ratio 2:1 - ok\n ").unwrap();
        assert_eq!(field, "01/02/2016 à 15:30");
        assert_eq!(author, "Alice");
        assert_eq!(message, "ratio 2:1 - ok");
    }

    #[test]
    fn test_split_unit_fixed_two_char_trim() {
        // Not a general trim: exactly two characters go, whatever they are.
        let (_, _, message) = split_unit("01/02/2016 à 15:30 - Bob: Hi?\n").unwrap();
        assert_eq!(message, "Hi");

        let (_, _, message) = split_unit("01/02/2016 à 15:30 - Bob: héé").unwrap();
        assert_eq!(message, "h");

        let (_, _, message) = split_unit("01/02/2016 à 15:30 - Bob: a  \n ").unwrap();
        assert_eq!(message, "a  ");
    }

    #[test]
    fn test_split_unit_missing_colon_is_malformed() {
        let err = split_unit("01/02/2016 à 15:30 - Bob joined at 10:30\n ").unwrap_err();
        assert!(matches!(err, ParseErrorKind::MalformedMessage(_)));
    }

    #[test]
    fn test_split_unit_short_body_gives_empty_message() {
        let (_, author, message) = split_unit("01/02/2016 à 15:30 - Bob: \n").unwrap();
        assert_eq!(author, "Bob");
        assert_eq!(message, "");
    }

    #[test]
    fn test_split_unit_blank_author_is_malformed() {
        let err = split_unit("01/02/2016 à 15:30 -  : hi\n ").unwrap_err();
        assert!(matches!(err, ParseErrorKind::MalformedMessage(_)));
    }

    #[test]
    fn test_trim_tail() {
        assert_eq!(trim_tail("Hello\n "), "Hello");
        assert_eq!(trim_tail("ab"), "");
        assert_eq!(trim_tail("a"), "");
        assert_eq!(trim_tail(""), "");
        assert_eq!(trim_tail("🎉🎉🎉"), "🎉");
    }

    #[test]
    fn test_parse_two_records() {
        let raw = "01/02/2016 à 15:30 - Alice: Hello\n01/02/2016 à 15:31 - Bob: Hi?\n";
        let conv = parse(raw, &french()).unwrap();

        assert_eq!(conv.len(), 2);
        let first = &conv.records()[0];
        assert_eq!(
            first.timestamp,
            NaiveDate::from_ymd_opt(2016, 2, 1)
                .unwrap()
                .and_hms_opt(15, 30, 0)
                .unwrap()
        );
        assert_eq!(first.author, "Alice");
        assert_eq!(first.message, "Hello");
        assert_eq!(conv.records()[1].message, "Hi");
    }

    #[test]
    fn test_parse_multiline_message() {
        let raw = "01/02/2016 à 15:30 - Alice: line one\nline two\n01/02/2016 à 15:31 - Bob: ok\n";
        let conv = parse(raw, &french()).unwrap();
        assert_eq!(conv.len(), 2);
        assert_eq!(conv.records()[0].message, "line one\n line two");
    }

    #[test]
    fn test_parse_drops_system_notices() {
        let raw = "01/02/2016 à 15:29 - Alice created group \"Trip\"\n\
                   01/02/2016 à 15:30 - Alice: Hello\n\
                   01/02/2016 à 15:31 - Bob: Hi\n";
        let conv = parse(raw, &french()).unwrap();
        assert_eq!(conv.authors(), vec!["Alice", "Bob"]);
        assert_eq!(conv.len(), 2);
    }

    #[test]
    fn test_parse_no_header_match() {
        let err = parse("just some text\n", &french()).unwrap_err();
        assert!(err.is_unrecognized_format());
        assert_eq!(err.parse_kind().unwrap().label(), "no header match");
    }

    #[test]
    fn test_parse_bad_timestamp() {
        let header = HeaderPattern::new(r"\d{2}/\d{2}/\d{4} à \d{2}:\d{2} - ", "%d/%m/%Y à %H:%M")
            .unwrap();
        let err = parse("31/02/2016 à 15:30 - Alice: Hello\n ", &header).unwrap_err();
        match err.parse_kind() {
            Some(ParseErrorKind::BadTimestamp { value, .. }) => {
                assert_eq!(value, "31/02/2016 à 15:30");
            }
            other => panic!("expected bad timestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_american_dialect() {
        let raw = "2/1/16, 15:30 - Alice: Hello\n12/31/16, 23:59 - Bob: Bye\n";
        let conv = ExportParser::new(Dialect::American).parse_str(raw).unwrap();
        assert_eq!(conv.len(), 2);
        assert_eq!(conv.records()[1].timestamp.to_string(), "2016-12-31 23:59:00");
    }

    #[test]
    fn test_detect_then_parse() {
        let raw = "2/1/16, 15:30 - Alice: Hello\n2/1/16, 15:31 - Bob: Yo\n";
        let parser = ExportParser::detect(raw).unwrap();
        assert_eq!(parser.header().name(), "American");
        assert!(ExportParser::detect("nothing").is_err());
    }

    #[test]
    fn test_parse_file_error_has_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, "not an export\n").unwrap();

        let err = ExportParser::new(Dialect::French).parse(&path).unwrap_err();
        assert!(err.to_string().contains("chat.txt"));
    }

    #[test]
    fn test_read_export_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_export(&path).unwrap_err();
        assert!(matches!(err, ChatlensError::Utf8 { .. }));
    }
}
