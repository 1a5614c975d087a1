//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! `Args` maps its flags onto the library configuration types, so the binary
//! only wires them together:
//!
//! ```rust
//! use chatstat::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstat", "chat.txt", "--user", "Alice", "--top-words", "10"]);
//! assert_eq!(args.analysis_config().top_words, 10);
//! assert_eq!(args.user_filter().to_string(), "Alice");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DEFAULT_STOP_WORDS_FILE, TranscriptConfig};
use crate::core::filter::{FilterConfig, OVERALL, UserFilter};
use crate::error::Result;

/// Parse an exported WhatsApp chat and print activity statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice --top-words 10
    chatstat chat.txt --after 2024-01-01 -o messages.csv
    chatstat chat.txt --report -o report.json
    chatstat chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Analyze a single participant instead of everyone
    #[arg(short, long, value_name = "NAME", default_value = OVERALL)]
    pub user: String,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Stop-word list, one or more words per line
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOP_WORDS_FILE)]
    pub stop_words: PathBuf,

    /// Do not filter stop words
    #[arg(long)]
    pub no_stop_words: bool,

    /// Number of words in the common-words ranking
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of senders in the busiest-users ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Write the parsed table (or the report with --report) to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Format of the parsed table; defaults to the output file extension
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the aggregated report as JSON instead of the parsed table
    #[arg(long, requires = "output")]
    pub report: bool,

    /// Drop group and system notifications after parsing
    #[arg(long)]
    pub no_notifications: bool,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,
}

impl Args {
    pub fn transcript_config(&self) -> TranscriptConfig {
        TranscriptConfig::new().with_skip_notifications(self.no_notifications)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::new()
            .with_top_words(self.top_words)
            .with_top_users(self.top_users);
        if self.no_stop_words {
            config.without_stop_words()
        } else {
            config.with_stop_words_path(self.stop_words.clone())
        }
    }

    /// Date range from `--after` / `--before`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChatstatError::InvalidDate`] for malformed dates.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        Ok(config)
    }

    pub fn user_filter(&self) -> UserFilter {
        UserFilter::from_selection(&self.user)
    }
}

/// Output format options.
///
/// ```rust
/// use chatstat::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(format.to_string(), "JSONL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatstat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert!(args.user_filter().is_overall());
        assert_eq!(args.analysis_config(), AnalysisConfig::default());
        assert!(!args.transcript_config().skip_notifications);
        assert!(!args.filter_config().unwrap().is_active());
        assert!(args.output.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_flags_map_to_configs() {
        let args = parse(&[
            "chat.txt",
            "-u",
            "Bob",
            "--after",
            "2024-01-01",
            "--top-users",
            "3",
            "--no-stop-words",
            "--no-notifications",
        ]);
        assert_eq!(args.user_filter(), UserFilter::Sender("Bob".into()));
        assert_eq!(args.analysis_config().top_users, 3);
        assert!(args.analysis_config().stop_words_path.is_none());
        assert!(args.transcript_config().skip_notifications);
        assert!(args.filter_config().unwrap().after.is_some());
    }

    #[test]
    fn test_invalid_date_is_reported() {
        let args = parse(&["chat.txt", "--before", "31/12/2024"]);
        assert!(args.filter_config().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_report_requires_output() {
        let result = Args::try_parse_from(["chatstat", "chat.txt", "--report"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_value_enum() {
        let args = parse(&["chat.txt", "-o", "out.txt", "-f", "ndjson"]);
        assert_eq!(args.format, Some(OutputFormat::Jsonl));
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Json),
            crate::format::OutputFormat::Json
        );
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
    }
}
