//! Aggregation layer: read-only queries over parsed records.
//!
//! This module contains:
//! - [`filter`] - User selection and date range filtering
//! - [`stats`] - Summary counts, busiest users, the user list
//! - [`timeline`] - Monthly/daily timelines, weekday/month activity, heatmap
//! - [`words`] - Stop words, common words, word cloud text
//! - [`emoji`] - Emoji frequency with a pluggable classifier
//! - [`links`] - URL extraction service
//! - [`analyzer`] - [`Analyzer`] and [`Report`], bundling all of the above
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! Every aggregation takes `&[Message]` plus a [`UserFilter`] and returns an
//! empty result, never an error, when nothing is selected.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{Analyzer, UserFilter};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::Message;
//!
//! let messages: Vec<Message> = Vec::new();
//! let analyzer = Analyzer::new(AnalysisConfig::new().without_stop_words());
//! let report = analyzer.report(&messages, &UserFilter::Overall);
//! assert_eq!(report.summary.messages, 0);
//! ```

pub mod analyzer;
mod counter;
pub mod emoji;
pub mod filter;
pub mod links;
pub mod output;
pub mod stats;
pub mod timeline;
pub mod words;

// Re-export main types for convenience
pub use analyzer::{Analyzer, Report};
pub use counter::Frequency;
pub use emoji::{EmojiClassifier, UnicodeEmoji, emoji_helper};
pub use filter::{FilterConfig, OVERALL, UserFilter, apply_filters};
pub use links::UrlExtractor;
pub use stats::{BusyUsers, SenderShare, Summary, fetch_stats, most_busy_users, users};
pub use timeline::{
    DailyPoint, Heatmap, MonthlyPoint, activity_heatmap, daily_timeline, month_activity_map,
    monthly_timeline, week_activity_map,
};
pub use words::{StopWords, most_common_words, word_cloud_text};

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl, write_report};
