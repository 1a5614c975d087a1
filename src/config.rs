//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`TranscriptConfig`] - how the transcript parser recognizes entries
//! - [`AnalysisConfig`] - limits and markers used by the aggregation layer
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, TranscriptConfig};
//! use chatstat::parsers::TranscriptParser;
//!
//! let config = TranscriptConfig::new().with_skip_notifications(true);
//! let parser = TranscriptParser::with_config(config);
//!
//! let analysis = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .without_stop_words();
//! assert!(analysis.stop_words_path.is_none());
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parsing::DateFormat;

/// Opening words of the notice WhatsApp Business chats start with.
pub const DEFAULT_SECURITY_PREAMBLE: &str = "This business uses a secure service from Meta";

/// Stop-word list looked up when no other path is configured.
pub const DEFAULT_STOP_WORDS_FILE: &str = "stop_hinglish.txt";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::TranscriptConfig;
/// use chatstat::parsing::DateFormat;
///
/// let config = TranscriptConfig::new()
///     .with_date_formats(vec![DateFormat::TwentyFourHour]);
/// assert_eq!(config.date_formats.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Prefix marking platform notices (default: [`DEFAULT_SECURITY_PREAMBLE`])
    pub security_preamble: String,

    /// Date format variants to try, in order (default: all three)
    pub date_formats: Vec<DateFormat>,

    /// Drop group and system notifications after parsing (default: false)
    pub skip_notifications: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            security_preamble: DEFAULT_SECURITY_PREAMBLE.to_string(),
            date_formats: DateFormat::all().to_vec(),
            skip_notifications: false,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the security notice prefix.
    #[must_use]
    pub fn with_security_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.security_preamble = preamble.into();
        self
    }

    /// Restricts and orders the date format variants that are tried.
    #[must_use]
    pub fn with_date_formats(mut self, formats: Vec<DateFormat>) -> Self {
        self.date_formats = formats;
        self
    }

    /// Sets whether notification records are dropped.
    #[must_use]
    pub fn with_skip_notifications(mut self, skip: bool) -> Self {
        self.skip_notifications = skip;
        self
    }
}

/// Configuration for the aggregation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of senders in the busiest-users ranking (default: 5)
    pub top_users: usize,

    /// Number of tokens in the common-words ranking (default: 20)
    pub top_words: usize,

    /// Case-insensitive marker counted as a media message (default: "media omitted")
    pub media_marker: String,

    /// Exact body excluded from word statistics (default: "<Media omitted>")
    pub media_placeholder: String,

    /// Stop-word list to load; `None` disables filtering
    pub stop_words_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 5,
            top_words: 20,
            media_marker: "media omitted".to_string(),
            media_placeholder: crate::message::MEDIA_OMITTED.to_string(),
            stop_words_path: Some(PathBuf::from(DEFAULT_STOP_WORDS_FILE)),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the busiest-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the size of the common-words ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the media marker (matched case-insensitively).
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Sets the stop-word list path.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = Some(path.into());
        self
    }

    /// Disables stop-word filtering.
    #[must_use]
    pub fn without_stop_words(mut self) -> Self {
        self.stop_words_path = None;
        self
    }
}
