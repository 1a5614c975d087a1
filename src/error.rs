//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers all error
//! cases in the library.
//!
//! # Error Taxonomy
//!
//! - **Format failure**: the transcript does not follow the export convention
//!   ([`ChatstatError::UnrecognizedFormat`]). Recoverable; ask for another file.
//! - **Empty result**: parsing worked but nothing is left to analyze
//!   ([`ChatstatError::EmptyTranscript`]). Distinct from a format failure.
//! - **I/O and encoding** problems while reading or writing files.
//!
//! Missing optional resources (stop-word list) are not errors; they are logged
//! and processing continues.

use std::fmt;
use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// Why a transcript could not be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFailure {
    /// The entry boundary pattern matched nothing.
    NoTimestamps,
    /// Timestamps were found but no date format parses all of them.
    NoMatchingDateFormat,
}

impl fmt::Display for FormatFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatFailure::NoTimestamps => write!(f, "no timestamped entries found"),
            FormatFailure::NoMatchingDateFormat => {
                write!(f, "timestamps do not match any known date format")
            }
        }
    }
}

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript does not follow the supported export convention.
    #[error("Could not process chat file: {reason}")]
    UnrecognizedFormat {
        /// What exactly went wrong
        reason: FormatFailure,
    },

    /// Parsing succeeded but there is nothing to analyze.
    #[error("No data to analyze{}", user.as_ref().map(|u| format!(" for '{u}'")).unwrap_or_default())]
    EmptyTranscript {
        /// The selected user, if the emptiness comes from a user filter
        user: Option<String>,
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

    /// Unknown output format name or extension.
    #[error("Invalid output format: {message}")]
    InvalidOutput {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates a format failure error.
    pub fn unrecognized_format(reason: FormatFailure) -> Self {
        ChatstatError::UnrecognizedFormat { reason }
    }

    /// Creates an empty result error.
    pub fn empty(user: Option<String>) -> Self {
        ChatstatError::EmptyTranscript { user }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid output format error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        ChatstatError::InvalidOutput {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if the transcript format was not recognized.
    pub fn is_format_failure(&self) -> bool {
        matches!(self, ChatstatError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if there was no data to analyze.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ChatstatError::EmptyTranscript { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}
