//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Conversation;
use crate::error::ChatlensError;

/// Timestamp column format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const HEADER: [&str; 3] = ["Timestamp", "Author", "Message"];

/// Writes one row per record to `path`.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(conversation: &Conversation, path: impl AsRef<Path>) -> Result<(), ChatlensError> {
    let file = File::create(path)?;
    write_rows(conversation, file)
}

/// Same rows as [`write_csv`], returned as a string.
pub fn to_csv(conversation: &Conversation) -> Result<String, ChatlensError> {
    let mut buffer = Vec::new();
    write_rows(conversation, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(conversation: &Conversation, sink: W) -> Result<(), ChatlensError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in conversation {
        writer.write_record([
            record.timestamp.format(TIMESTAMP_FORMAT).to_string().as_str(),
            record.author(),
            record.message(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
