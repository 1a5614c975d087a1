//! JSON Lines (JSONL) output writer.
//!
//! One record per line, so large tables can be consumed incrementally.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-01T10:00:00","sender":"Alice","body":"Hello",...}
/// {"timestamp":"2024-01-01T10:05:00","sender":"Bob","body":"Hi",...}
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_jsonl(messages: &[Message], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[Message], writer: &mut W) -> Result<()> {
    for msg in messages {
        let line = serde_json::to_string(msg)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
