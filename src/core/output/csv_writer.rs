//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::output::TIMESTAMP_FORMAT;
use crate::error::Result;

const HEADER: [&str; 12] = [
    "timestamp",
    "sender",
    "body",
    "date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `timestamp`, `sender`, `body` and the derived calendar columns
/// - Encoding: UTF-8
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv(messages: &[Message], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for msg in messages {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single message.
fn build_record(msg: &Message) -> [String; 12] {
    [
        msg.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        msg.sender().to_string(),
        msg.body().to_string(),
        msg.date().to_string(),
        msg.year().to_string(),
        msg.month_num().to_string(),
        msg.month().to_string(),
        msg.day().to_string(),
        msg.day_name().to_string(),
        msg.hour().to_string(),
        msg.minute().to_string(),
        msg.period().to_string(),
    ]
}
