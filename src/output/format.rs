//! Output format selection.

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// How results are emitted.
///
/// - [`Text`](OutputFormat::Text) - human-readable summary (default)
/// - [`Json`](OutputFormat::Json) - full report, good for dashboards
/// - [`Csv`](OutputFormat::Csv) - parsed records, one per row
///
/// # Example
///
/// ```rust
/// use chatlens::output::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Summary printed for a terminal
    #[default]
    Text,

    /// Pretty JSON of the whole report
    Json,

    /// Semicolon-delimited record table
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("report.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        ext.parse().map_err(|_| ChatlensError::InvalidFormat {
            message: format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}
