//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. Parse failures carry a [`ParseErrorKind`] so callers
//! can tell an unrecognized file apart from a single broken message.
//!
//! # Drop vs fail
//!
//! Not every oddity in an export is an error. Units that fail the
//! [`is_message`](crate::parser::is_message) pre-filter (system notices
//! without an author, header-only lines) are dropped silently. Only units
//! that look like messages but cannot be split apart, or whose timestamp
//! does not parse, produce a [`ChatlensError::Parse`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the input export.
    ///
    /// Contains the dialect being parsed, the kind of failure,
    /// and optionally the file path.
    #[error("Failed to parse {dialect} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The dialect being parsed (e.g., "French", "American", "custom")
        dialect: &'static str,
        /// What went wrong
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A custom header pattern is not a valid regular expression.
    #[error("Invalid header pattern '{pattern}': {source}")]
    InvalidDialect {
        /// The pattern that was rejected
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown output format or file extension.
    #[error("Invalid output format: {message}")]
    InvalidFormat {
        /// What was rejected and what is accepted
        message: String,
    },

    /// The conversation holds no records, so there is nothing to report on.
    #[error("Conversation is empty")]
    EmptyConversation,

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The header pattern never matched; the file is in an unrecognized format.
    #[error("no header match")]
    NoHeaderMatch,

    /// A unit looked like a message but lacked the `" - "` / `": "` structure,
    /// or split into a blank author.
    #[error("malformed message: {0:?}")]
    MalformedMessage(String),

    /// The timestamp field did not match the configured format.
    #[error("bad timestamp {value:?} (expected format {format:?}): {source}")]
    BadTimestamp {
        /// The offending substring
        value: String,
        /// The format it was parsed with
        format: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },
}

impl ParseErrorKind {
    /// Short, stable label for the failure kind.
    pub fn label(&self) -> &'static str {
        match self {
            ParseErrorKind::NoHeaderMatch => "no header match",
            ParseErrorKind::MalformedMessage(_) => "malformed message",
            ParseErrorKind::BadTimestamp { .. } => "bad timestamp",
        }
    }
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a parse error for the given dialect.
    pub fn parse(dialect: &'static str, source: ParseErrorKind, path: Option<PathBuf>) -> Self {
        ChatlensError::Parse {
            dialect,
            source,
            path,
        }
    }

    /// Creates an invalid header pattern error.
    pub fn invalid_dialect(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChatlensError::InvalidDialect {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Attaches a file path to a parse error. Other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatlensError::Parse {
                dialect, source, ..
            } => ChatlensError::Parse {
                dialect,
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns the parse failure kind, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            ChatlensError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if the export did not match the header pattern at all.
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(
            self,
            ChatlensError::Parse {
                source: ParseErrorKind::NoHeaderMatch,
                ..
            }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if an output format or extension was rejected.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
