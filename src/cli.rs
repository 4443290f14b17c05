//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`DialectArg`], [`LanguageArg`], [`FormatArg`] - value enums mapping onto
//!   the library's [`Dialect`], [`Language`] and [`OutputFormat`]
//!
//! Arguments convert into library configuration with [`Args::analysis_config`]
//! and [`Args::filter_config`].

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{AnalysisConfig, Language};
use crate::dialect::Dialect;
use crate::error::ChatlensError;
use crate::filter::FilterConfig;
use crate::output::OutputFormat;

/// Statistics for exported WhatsApp conversations.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --dialect us --language en
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --format csv --after 2024-01-01 --from Alice
    chatlens chat.txt --media '<attached>' -vv")]
pub struct Args {
    /// Path to the exported .txt file
    pub input: PathBuf,

    /// Header dialect of the export (auto-detected when omitted)
    #[arg(short, long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Export language, selects the media placeholder
    #[arg(short, long, value_enum, default_value = "en")]
    pub language: LanguageArg,

    /// Custom media placeholder, overrides --language
    #[arg(long, value_name = "TEXT")]
    pub media: Option<String>,

    /// Output format (inferred from --output's extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only records from this author
    #[arg(long, value_name = "AUTHOR")]
    pub from: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Aggregation settings selected by `--language` and `--media`.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::for_language(self.language.into());
        match self.media {
            Some(ref placeholder) => config.with_media_placeholder(placeholder.clone()),
            None => config,
        }
    }

    /// Record filters selected by `--after`, `--before` and `--from`.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::InvalidDate`] if a date is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatlensError> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_author(from.clone());
        }
        Ok(filter)
    }

    /// The format selected by `--format`, else by the `--output` extension,
    /// else text.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::InvalidFormat`] if the format is inferred from an
    /// output path with an unknown extension.
    pub fn output_format(&self) -> Result<OutputFormat, ChatlensError> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format.into()),
            (None, Some(path)) => OutputFormat::from_path(&path.to_string_lossy()),
            (None, None) => Ok(OutputFormat::Text),
        }
    }

    /// The `tracing` filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Header dialect argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DialectArg {
    /// `DD/MM/YYYY à HH:MM - `
    #[value(alias = "french")]
    Fr,
    /// `M/D/YY, HH:MM - `
    #[value(alias = "american")]
    Us,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Fr => Dialect::French,
            DialectArg::Us => Dialect::American,
        }
    }
}

/// Export language argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LanguageArg {
    /// `<Media omitted>`
    #[value(alias = "english")]
    En,
    /// `<Médias omis>`
    #[value(alias = "french")]
    Fr,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::English,
            LanguageArg::Fr => Language::French,
        }
    }
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormatArg {
    /// Human-readable summary
    #[value(alias = "txt")]
    Text,
    /// Full report as JSON
    Json,
    /// Parsed records as CSV
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}
