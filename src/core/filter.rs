//! Select records by user and date range.
//!
//! - [`UserFilter`] is the per-user selection every aggregation takes
//!   (`"Overall"` or one exact sender name).
//! - [`FilterConfig`] + [`apply_filters`] narrow a transcript to an
//!   inclusive date range before analysis.
//!
//! # Examples
//!
//! ## Filter by User
//!
//! ```
//! use chatstat::core::filter::UserFilter;
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(ts, "Alice", "Hello"),
//!     Message::new(ts, "Bob", "Hi there"),
//!     Message::new(ts, "Alice", "How are you?"),
//! ];
//!
//! let alice = UserFilter::from_selection("Alice");
//! assert_eq!(alice.select(&messages).count(), 2);
//! assert_eq!(UserFilter::from_selection("Overall").select(&messages).count(), 3);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatstat::Result<()> {
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(day(1), "Alice", "Old"),
//!     Message::new(day(15), "Alice", "New"),
//! ];
//!
//! let config = FilterConfig::new().with_date_from("2024-06-10")?;
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), "New");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::ChatstatError;

/// Selection label meaning "every sender".
pub const OVERALL: &str = "Overall";

/// Which sender an aggregation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserFilter {
    /// All records.
    #[default]
    Overall,
    /// Records whose sender equals the name exactly.
    Sender(String),
}

impl UserFilter {
    /// Maps a user-list selection to a filter; `"Overall"` means no filter.
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            UserFilter::Overall
        } else {
            UserFilter::Sender(selection.to_string())
        }
    }

    /// Returns `true` if `msg` is part of the selection.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::Sender(name) => msg.sender() == name,
        }
    }

    /// Iterates over the selected records, in transcript order.
    pub fn select<'a>(&'a self, messages: &'a [Message]) -> impl Iterator<Item = &'a Message> + 'a {
        messages.iter().filter(move |msg| self.matches(msg))
    }

    /// Returns `true` for the unfiltered selection.
    pub fn is_overall(&self) -> bool {
        matches!(self, UserFilter::Overall)
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::Overall => write!(f, "{OVERALL}"),
            UserFilter::Sender(name) => write!(f, "{name}"),
        }
    }
}

/// Inclusive calendar date range.
///
/// # Examples
///
/// ```
/// use chatstat::core::filter::FilterConfig;
///
/// # fn main() -> chatstat::Result<()> {
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(by_date.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` falls inside the range.
    pub fn matches(&self, msg: &Message) -> bool {
        let date = msg.date();
        self.after.is_none_or(|after| date >= after)
            && self.before.is_none_or(|before| date <= before)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Keeps the records inside the configured date range.
///
/// Order is preserved. If no bound is set, returns the input unchanged.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_msg(sender: &str, body: &str, date: &str) -> Message {
        let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Message::new(naive.and_hms_opt(12, 0, 0).unwrap(), sender, body)
    }

    #[test]
    fn test_user_filter_from_selection() {
        assert_eq!(UserFilter::from_selection("Overall"), UserFilter::Overall);
        assert_eq!(
            UserFilter::from_selection("Alice"),
            UserFilter::Sender("Alice".to_string())
        );
        assert!(UserFilter::default().is_overall());
    }

    #[test]
    fn test_user_filter_is_exact() {
        let messages = vec![
            make_msg("Alice", "Hello", "2024-01-01"),
            make_msg("alice", "Bye", "2024-01-01"),
            make_msg("Bob", "Hi", "2024-01-01"),
        ];
        let filter = UserFilter::from_selection("Alice");
        let selected: Vec<_> = filter.select(&messages).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].body(), "Hello");
    }

    #[test]
    fn test_user_filter_display() {
        assert_eq!(UserFilter::Overall.to_string(), "Overall");
        assert_eq!(UserFilter::Sender("Bob".into()).to_string(), "Bob");
    }

    #[test]
    fn test_filter_by_date_from() {
        let messages = vec![
            make_msg("Alice", "Old", "2024-01-01"),
            make_msg("Alice", "New", "2024-06-15"),
        ];

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = apply_filters(messages, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body(), "New");
    }

    #[test]
    fn test_filter_by_date_to_is_inclusive() {
        let messages = vec![
            make_msg("Alice", "Old", "2024-01-01"),
            make_msg("Alice", "Edge", "2024-03-01"),
            make_msg("Alice", "New", "2024-06-15"),
        ];

        let config = FilterConfig::new().with_date_to("2024-03-01").unwrap();
        let filtered = apply_filters(messages, &config);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].body(), "Edge");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatstatError::InvalidDate { .. })));
    }

    #[test]
    fn test_inactive_filter_returns_input() {
        let messages = vec![make_msg("Alice", "Hi", "2024-01-01")];
        let config = FilterConfig::new();
        assert!(!config.is_active());
        assert_eq!(apply_filters(messages.clone(), &config), messages);
    }
}
