//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::analyzer::Report;
use crate::error::Result;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-01T10:00:00", "sender": "Alice", "body": "Hello", ...},
///   {"timestamp": "2024-01-01T10:05:00", "sender": "Bob", "body": "Hi", ...}
/// ]
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json(messages: &[Message], output_path: &str) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(messages: &[Message]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

/// Writes a [`Report`] as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_report(report: &Report, output_path: &str) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a [`Report`] to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
