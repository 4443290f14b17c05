//! Output writers for reports and record tables.
//!
//! - [`write_json`] / [`to_json`] - the full [`Report`](crate::report::Report) as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - one row per record, semicolon delimited - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::AnalysisConfig;
//! use chatlens::output::{write_csv, write_json};
//! use chatlens::parser::ExportParser;
//! use chatlens::report::Report;
//!
//! let conv = ExportParser::detect(&std::fs::read_to_string("chat.txt")?)?
//!     .parse("chat.txt".as_ref())?;
//!
//! write_csv(&conv, "records.csv")?;
//! write_json(&Report::build(&conv, &AnalysisConfig::default())?, "report.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod format;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{TIMESTAMP_FORMAT, to_csv, write_csv};
pub use format::OutputFormat;
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
