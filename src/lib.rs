//! # Chatstat
//!
//! Parse exported WhatsApp chat transcripts into structured records and
//! compute descriptive statistics over them.
//!
//! ## Overview
//!
//! A transcript is one text blob of timestamp-prefixed entries. The
//! [`parsers::TranscriptParser`] turns it into an ordered `Vec<`[`Message`]`>`
//! and the [`core`] aggregation layer answers read-only questions about it:
//! message/word/media/link counts, busiest senders, timelines, weekday and
//! month activity, a weekday by hour heatmap, common words and emoji usage.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "01/01/2024, 10:00 am - Alice: hello world\n\
//!                 01/01/2024, 10:05 am - Bob: <Media omitted>\n";
//!     let messages = TranscriptParser::new().parse_str(text)?;
//!
//!     let analyzer = Analyzer::new(AnalysisConfig::new().without_stop_words());
//!     let summary = analyzer.fetch_stats(&messages, &UserFilter::Overall);
//!     assert_eq!(summary.messages, 2);
//!     assert_eq!(summary.media, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Failures
//!
//! A file that does not follow the export convention yields
//! [`ChatstatError::UnrecognizedFormat`]; a selection with nothing in it is
//! not an error for the library, every aggregation simply returns an empty
//! result. The CLI reports the latter as [`ChatstatError::EmptyTranscript`].
//!
//! ## Module Structure
//!
//! - [`parser`] - the [`Parser`](parser::Parser) trait
//! - [`parsers`] - [`TranscriptParser`](parsers::TranscriptParser)
//! - [`parsing`] - entry splitting, date format detection, sender split
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - aggregations, [`Analyzer`](core::Analyzer), output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`message`] - [`Message`] and the notification sentinels
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;
    pub use crate::message::{GROUP_NOTIFICATION, SYSTEM_NOTIFICATION};

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Parsing
    pub use crate::parser::Parser;
    pub use crate::parsers::{ParsedTranscript, TranscriptParser};
    pub use crate::parsing::DateFormat;

    // Configuration
    pub use crate::config::{AnalysisConfig, TranscriptConfig};

    // Aggregation
    pub use crate::core::{
        Analyzer, EmojiClassifier, FilterConfig, Report, StopWords, UnicodeEmoji, UrlExtractor,
        UserFilter, apply_filters,
    };

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl, write_report};
    pub use crate::format::OutputFormat;
}
