//! Output format selection.
//!
//! Picks one of the writers in [`crate::core::output`] by name or file
//! extension, without depending on any CLI framework.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::format::{OutputFormat, write_to_format};
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let messages = vec![Message::new(ts, "Alice", "Hello!")];
//!
//! write_to_format(&messages, "output.csv", OutputFormat::Csv)?;
//!
//! let format = OutputFormat::from_path("output.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::ChatstatError;

/// Output format for the record table.
///
/// # Example
///
/// ```rust
/// use chatstat::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidOutput`] for unknown extensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("report.JSON").unwrap();
    /// assert_eq!(format, OutputFormat::Json);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatstatError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatstatError::invalid_output(format!(
                "Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"
            ))),
        }
    }

    /// Feature that enables this format's writer.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[Message],
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatstatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts records to a string in the specified format.
///
/// # Errors
///
/// Returns an error if the required feature is not enabled or serialization fails.
#[allow(unused_variables)]
pub fn to_format_string(messages: &[Message], format: OutputFormat) -> Result<String, ChatstatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatstatError {
    ChatstatError::invalid_output(format!(
        "Output format {format} requires the '{}' feature to be enabled",
        format.feature()
    ))
}
