//! Headline numbers and sender rankings.
//!
//! # Example
//!
//! ```
//! use chatstat::core::filter::UserFilter;
//! use chatstat::core::links::UrlExtractor;
//! use chatstat::core::stats::{fetch_stats, most_busy_users};
//! use chatstat::parser::Parser;
//! use chatstat::parsers::TranscriptParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let text = "01/01/2024, 10:00 am - Alice: hello world\n\
//!             01/01/2024, 10:05 am - Bob: <Media omitted>\n";
//! let messages = TranscriptParser::new().parse_str(text)?;
//!
//! let summary = fetch_stats(&messages, &UserFilter::Overall, &UrlExtractor::new(), "media omitted");
//! assert_eq!((summary.messages, summary.words, summary.media, summary.links), (2, 2, 1, 0));
//!
//! let busy = most_busy_users(&messages, &UserFilter::Overall, 5);
//! assert_eq!(busy.shares[0].rounded(), 50.0);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::Message;
use crate::core::counter::{Frequency, rank_by_count};
use crate::core::filter::{OVERALL, UserFilter};
use crate::core::links::UrlExtractor;
use crate::message::GROUP_NOTIFICATION;

/// Message, word, media and link counts for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub messages: usize,
    /// Whitespace-separated tokens, media messages excluded.
    pub words: usize,
    /// Bodies containing the media marker, case-insensitively.
    pub media: usize,
    pub links: usize,
}

/// Computes the [`Summary`] of the selected records.
///
/// A record counts as media when its lowercased body contains
/// `media_marker` (lowercased). Media bodies contribute no words.
pub fn fetch_stats(
    messages: &[Message],
    filter: &UserFilter,
    urls: &UrlExtractor,
    media_marker: &str,
) -> Summary {
    let marker = media_marker.to_lowercase();

    filter
        .select(messages)
        .fold(Summary::default(), |mut summary, msg| {
            summary.messages += 1;
            if !marker.is_empty() && msg.body().to_lowercase().contains(&marker) {
                summary.media += 1;
            } else {
                summary.words += msg.body().split_whitespace().count();
            }
            summary.links += urls.count(msg.body());
            summary
        })
}

/// One sender's share of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub messages: usize,
    /// Unrounded percentage of the denominator.
    pub percent: f64,
}

impl SenderShare {
    /// Percentage rounded to two decimal places.
    pub fn rounded(&self) -> f64 {
        (self.percent * 100.0).round() / 100.0
    }
}

/// Busiest senders and every sender's share.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `top_n` senders by message count, notifications included.
    pub top: Frequency,
    /// Share of every sender, largest first.
    pub shares: Vec<SenderShare>,
}

/// Ranks senders by message count.
///
/// Shares are computed against the number of records that are not group
/// notifications, and the group notification row is left out. If every
/// record is a group notification, the denominator falls back to all records
/// and the row is kept.
pub fn most_busy_users(messages: &[Message], filter: &UserFilter, top_n: usize) -> BusyUsers {
    let ranked = rank_by_count(filter.select(messages).map(Message::sender));

    let total: usize = ranked.iter().map(|(_, count)| count).sum();
    let group: usize = ranked
        .iter()
        .find(|(sender, _)| *sender == GROUP_NOTIFICATION)
        .map_or(0, |(_, count)| *count);

    let (denominator, skip_group) = if total > group {
        (total - group, true)
    } else {
        (total, false)
    };

    let shares = ranked
        .iter()
        .filter(|(sender, _)| !(skip_group && *sender == GROUP_NOTIFICATION))
        .map(|&(sender, count)| SenderShare {
            sender: sender.to_string(),
            messages: count,
            percent: count as f64 / denominator as f64 * 100.0,
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(top_n)
        .map(|(sender, count)| (sender.to_string(), count))
        .collect();

    BusyUsers { top, shares }
}

/// Selectable users: `"Overall"` first, then every distinct sender sorted,
/// group notifications excluded.
pub fn users(messages: &[Message]) -> Vec<String> {
    let senders: BTreeSet<&str> = messages
        .iter()
        .map(Message::sender)
        .filter(|sender| *sender != GROUP_NOTIFICATION)
        .collect();

    std::iter::once(OVERALL)
        .chain(senders)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MEDIA_OMITTED, SYSTEM_NOTIFICATION};
    use chrono::NaiveDate;

    fn msg(sender: &str, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_fetch_stats_counts() {
        let messages = vec![
            msg("Alice", "hello world"),
            msg("Bob", MEDIA_OMITTED),
            msg("Alice", "Check http://x.co now"),
        ];
        let urls = UrlExtractor::new();
        let summary = fetch_stats(&messages, &UserFilter::Overall, &urls, "media omitted");
        assert_eq!(
            summary,
            Summary {
                messages: 3,
                words: 5,
                media: 1,
                links: 1,
            }
        );
    }

    #[test]
    fn test_fetch_stats_ignores_file_names() {
        let messages = vec![
            msg("Alice", "sent report.pdf and notes.txt"),
            msg("Bob", "node.js rocks, see www.example.org"),
        ];
        let summary = fetch_stats(
            &messages,
            &UserFilter::Overall,
            &UrlExtractor::new(),
            "media omitted",
        );
        assert_eq!(summary.links, 1);
    }

    #[test]
    fn test_fetch_stats_media_is_case_insensitive() {
        let messages = vec![msg("Alice", "<MEDIA OMITTED>"), msg("Alice", "image Media Omitted")];
        let summary = fetch_stats(
            &messages,
            &UserFilter::Overall,
            &UrlExtractor::new(),
            "media omitted",
        );
        assert_eq!(summary.media, 2);
        assert_eq!(summary.words, 0);
    }

    #[test]
    fn test_fetch_stats_per_user_and_empty() {
        let messages = vec![msg("Alice", "a b c"), msg("Bob", "d")];
        let urls = UrlExtractor::new();
        let bob = fetch_stats(&messages, &UserFilter::Sender("Bob".into()), &urls, "media omitted");
        assert_eq!((bob.messages, bob.words), (1, 1));

        let nobody = fetch_stats(&[], &UserFilter::Overall, &urls, "media omitted");
        assert_eq!(nobody, Summary::default());
    }

    #[test]
    fn test_most_busy_users_excludes_group_notifications_from_shares() {
        let messages = vec![
            msg("Alice", "1"),
            msg(GROUP_NOTIFICATION, "Bob joined"),
            msg("Alice", "2"),
            msg("Bob", "3"),
            msg("Alice", "4"),
            msg("Bob", "5"),
        ];
        let busy = most_busy_users(&messages, &UserFilter::Overall, 5);

        assert_eq!(
            busy.top,
            vec![
                ("Alice".to_string(), 3),
                ("Bob".to_string(), 2),
                (GROUP_NOTIFICATION.to_string(), 1),
            ]
        );
        assert_eq!(busy.shares.len(), 2);
        assert_eq!(busy.shares[0].sender, "Alice");
        assert_eq!(busy.shares[0].rounded(), 60.0);
        assert_eq!(busy.shares[1].rounded(), 40.0);
        let sum: f64 = busy.shares.iter().map(|s| s.percent).sum();
        assert!(sum <= 100.0 + 1e-9);
    }

    #[test]
    fn test_most_busy_users_only_notifications_falls_back() {
        let messages = vec![msg(GROUP_NOTIFICATION, "a"), msg(GROUP_NOTIFICATION, "b")];
        let busy = most_busy_users(&messages, &UserFilter::Overall, 5);
        assert_eq!(busy.shares.len(), 1);
        assert_eq!(busy.shares[0].rounded(), 100.0);
    }

    #[test]
    fn test_most_busy_users_top_n_and_rounding() {
        let messages = vec![
            msg("A", "x"),
            msg("B", "x"),
            msg("C", "x"),
            msg(SYSTEM_NOTIFICATION, "x"),
        ];
        let busy = most_busy_users(&messages, &UserFilter::Overall, 2);
        assert_eq!(busy.top.len(), 2);
        assert_eq!(busy.shares.len(), 4);
        assert_eq!(busy.shares[0].rounded(), 25.0);

        let thirds = most_busy_users(&messages[..3], &UserFilter::Overall, 5);
        assert_eq!(thirds.shares[0].rounded(), 33.33);
    }

    #[test]
    fn test_most_busy_users_empty() {
        let busy = most_busy_users(&[], &UserFilter::Overall, 5);
        assert_eq!(busy, BusyUsers::default());
    }

    #[test]
    fn test_users_list() {
        let messages = vec![
            msg("Zoe", "x"),
            msg(GROUP_NOTIFICATION, "x"),
            msg("Adam", "x"),
            msg("Zoe", "y"),
        ];
        assert_eq!(users(&messages), vec!["Overall", "Adam", "Zoe"]);
        assert_eq!(users(&[]), vec!["Overall"]);
    }
}
