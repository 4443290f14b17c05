//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ChatlensError;
use crate::report::Report;

/// Writes the report to `path` as pretty-printed JSON.
pub fn write_json(report: &Report, path: impl AsRef<Path>) -> Result<(), ChatlensError> {
    let json = to_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &Report) -> Result<String, ChatlensError> {
    Ok(serde_json::to_string_pretty(report)?)
}
