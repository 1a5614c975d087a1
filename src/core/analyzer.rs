//! Bundles the aggregation services behind one value.
//!
//! [`Analyzer`] is built once per run from an [`AnalysisConfig`]. It owns the
//! URL extractor, the stop-word list and the emoji classifier, and exposes
//! every aggregation as a method. All methods borrow the records and are
//! side-effect free.
//!
//! # Example
//!
//! ```
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::{Analyzer, UserFilter};
//! use chatstat::parser::Parser;
//! use chatstat::parsers::TranscriptParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let text = "01/01/2024, 10:00 am - Alice: hello world 😂\n\
//!             01/01/2024, 10:05 am - Bob: Check http://x.co now\n";
//! let messages = TranscriptParser::new().parse_str(text)?;
//!
//! let analyzer = Analyzer::new(AnalysisConfig::new().without_stop_words());
//! let report = analyzer.report(&messages, &UserFilter::Overall);
//!
//! assert_eq!(report.summary.links, 1);
//! assert_eq!(report.emojis[0].0, "😂");
//! assert_eq!(analyzer.users(&messages), vec!["Overall", "Alice", "Bob"]);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::counter::Frequency;
use crate::core::emoji::{EmojiClassifier, UnicodeEmoji, emoji_helper};
use crate::core::filter::UserFilter;
use crate::core::links::UrlExtractor;
use crate::core::stats::{self, BusyUsers, Summary};
use crate::core::timeline::{self, DailyPoint, Heatmap, MonthlyPoint};
use crate::core::words::{self, StopWords};

/// Every aggregation of one selection, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Selection the report was computed for.
    pub user: String,
    pub summary: Summary,
    pub busy_users: BusyUsers,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Frequency,
    pub month_activity: Frequency,
    pub heatmap: Heatmap,
    pub common_words: Frequency,
    pub emojis: Frequency,
}

/// Aggregation entry point.
#[derive(Debug)]
pub struct Analyzer<C = UnicodeEmoji> {
    config: AnalysisConfig,
    urls: UrlExtractor,
    stop_words: StopWords,
    emoji: C,
}

impl Analyzer<UnicodeEmoji> {
    /// Creates an analyzer, loading the configured stop-word list if any.
    pub fn new(config: AnalysisConfig) -> Self {
        let stop_words = config
            .stop_words_path
            .as_deref()
            .map(StopWords::load)
            .unwrap_or_default();

        Self {
            config,
            urls: UrlExtractor::new(),
            stop_words,
            emoji: UnicodeEmoji,
        }
    }
}

impl Default for Analyzer<UnicodeEmoji> {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl<C: EmojiClassifier> Analyzer<C> {
    /// Replaces the emoji classifier.
    pub fn with_classifier<D: EmojiClassifier>(self, emoji: D) -> Analyzer<D> {
        Analyzer {
            config: self.config,
            urls: self.urls,
            stop_words: self.stop_words,
            emoji,
        }
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// See [`stats::users`].
    pub fn users(&self, messages: &[Message]) -> Vec<String> {
        stats::users(messages)
    }

    pub fn fetch_stats(&self, messages: &[Message], filter: &UserFilter) -> Summary {
        stats::fetch_stats(messages, filter, &self.urls, &self.config.media_marker)
    }

    pub fn most_busy_users(&self, messages: &[Message], filter: &UserFilter) -> BusyUsers {
        stats::most_busy_users(messages, filter, self.config.top_users)
    }

    pub fn monthly_timeline(&self, messages: &[Message], filter: &UserFilter) -> Vec<MonthlyPoint> {
        timeline::monthly_timeline(messages, filter)
    }

    pub fn daily_timeline(&self, messages: &[Message], filter: &UserFilter) -> Vec<DailyPoint> {
        timeline::daily_timeline(messages, filter)
    }

    pub fn week_activity_map(&self, messages: &[Message], filter: &UserFilter) -> Frequency {
        timeline::week_activity_map(messages, filter)
    }

    pub fn month_activity_map(&self, messages: &[Message], filter: &UserFilter) -> Frequency {
        timeline::month_activity_map(messages, filter)
    }

    pub fn activity_heatmap(&self, messages: &[Message], filter: &UserFilter) -> Heatmap {
        timeline::activity_heatmap(messages, filter)
    }

    pub fn most_common_words(&self, messages: &[Message], filter: &UserFilter) -> Frequency {
        words::most_common_words(
            messages,
            filter,
            &self.stop_words,
            &self.config.media_placeholder,
            self.config.top_words,
        )
    }

    pub fn word_cloud_text(&self, messages: &[Message], filter: &UserFilter) -> String {
        words::word_cloud_text(
            messages,
            filter,
            &self.stop_words,
            &self.config.media_placeholder,
        )
    }

    pub fn emoji_helper(&self, messages: &[Message], filter: &UserFilter) -> Frequency {
        emoji_helper(messages, filter, &self.emoji)
    }

    /// Runs every aggregation for `filter`.
    pub fn report(&self, messages: &[Message], filter: &UserFilter) -> Report {
        tracing::debug!(%filter, records = messages.len(), "building report");
        Report {
            user: filter.to_string(),
            summary: self.fetch_stats(messages, filter),
            busy_users: self.most_busy_users(messages, filter),
            monthly_timeline: self.monthly_timeline(messages, filter),
            daily_timeline: self.daily_timeline(messages, filter),
            week_activity: self.week_activity_map(messages, filter),
            month_activity: self.month_activity_map(messages, filter),
            heatmap: self.activity_heatmap(messages, filter),
            common_words: self.most_common_words(messages, filter),
            emojis: self.emoji_helper(messages, filter),
        }
    }
}
