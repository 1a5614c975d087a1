//! Property-based tests for chatstat.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatstat::config::AnalysisConfig;
use chatstat::core::{Analyzer, UserFilter};
use chatstat::message::{GROUP_NOTIFICATION, SYSTEM_NOTIFICATION, hour_bucket};
use chatstat::parser::Parser;
use chatstat::parsers::TranscriptParser;

/// One transcript entry: (day, month, hour 0..24, minute, entry text)
fn arb_entry() -> impl Strategy<Value = (u32, u32, u32, u32, String)> {
    (
        1u32..=28,
        1u32..=12,
        0u32..24,
        0u32..60,
        prop_oneof![
            // Fast: select from predefined senders and bodies
            (
                prop::sample::select(vec!["Alice", "Bob", "Иван", "User 123", "🔥Fire"]),
                prop::sample::select(vec![
                    "Hello",
                    "hi there http://x.co",
                    "<Media omitted>",
                    "Привет мир",
                    "🎉🔥💀 emoji",
                    "",
                    "multi\nline text",
                    "time is 10:30 now",
                ]),
            )
                .prop_map(|(sender, body)| format!("{sender}: {body}")),
            prop::sample::select(vec![
                "Alice added Bob".to_string(),
                "Bob left".to_string(),
                "This business uses a secure service from Meta to manage this chat.".to_string(),
            ]),
        ],
    )
}

fn arb_transcript(max_len: usize) -> impl Strategy<Value = Vec<(u32, u32, u32, u32, String)>> {
    prop::collection::vec(arb_entry(), 1..max_len)
}

fn render(entries: &[(u32, u32, u32, u32, String)]) -> String {
    entries
        .iter()
        .map(|(day, month, hour, minute, text)| {
            let (h12, meridiem) = match hour {
                0 => (12, "am"),
                1..=11 => (*hour, "am"),
                12 => (12, "pm"),
                _ => (hour - 12, "pm"),
            };
            format!("{day:02}/{month:02}/2024, {h12}:{minute:02} {meridiem} - {text}\n")
        })
        .collect()
}

fn analyzer() -> Analyzer {
    Analyzer::new(AnalysisConfig::new().without_stop_words())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// One record per timestamp, in transcript order
    #[test]
    fn record_count_equals_entry_count(entries in arb_transcript(30)) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        prop_assert_eq!(messages.len(), entries.len());

        for (msg, (day, month, hour, minute, _)) in messages.iter().zip(&entries) {
            prop_assert_eq!(msg.day(), *day);
            prop_assert_eq!(msg.month_num(), *month);
            prop_assert_eq!(msg.hour(), *hour);
            prop_assert_eq!(msg.minute(), *minute);
            prop_assert_eq!(msg.period(), hour_bucket(*hour));
        }
    }

    /// Senders are never empty; sentinels only for entries without a name
    #[test]
    fn sender_classification(entries in arb_transcript(30)) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        for msg in &messages {
            prop_assert!(!msg.sender().is_empty());
            if msg.sender() == SYSTEM_NOTIFICATION {
                prop_assert!(msg.body().starts_with("This business uses a secure service from Meta"));
            }
            if msg.sender() == GROUP_NOTIFICATION {
                prop_assert!(msg.body() == "Alice added Bob" || msg.body() == "Bob left");
            }
        }
    }

    /// Random text never panics the parser
    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}") {
        let _ = TranscriptParser::new().parse_str(&text);
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Shares never exceed 100% in total
    #[test]
    fn shares_sum_at_most_100(entries in arb_transcript(40)) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        let busy = analyzer().most_busy_users(&messages, &UserFilter::Overall);
        let total: f64 = busy.shares.iter().map(|s| s.percent).sum();
        prop_assert!(total <= 100.0 + 1e-6);
        prop_assert!(busy.top.len() <= 5);
    }

    /// Every record lands in exactly one heatmap cell and one day
    #[test]
    fn aggregations_account_for_every_record(entries in arb_transcript(40)) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        let analyzer = analyzer();
        let filter = UserFilter::Overall;

        prop_assert_eq!(analyzer.activity_heatmap(&messages, &filter).total(), messages.len());
        let daily: usize = analyzer.daily_timeline(&messages, &filter).iter().map(|p| p.messages).sum();
        prop_assert_eq!(daily, messages.len());
        let weekly: usize = analyzer.week_activity_map(&messages, &filter).iter().map(|(_, c)| c).sum();
        prop_assert_eq!(weekly, messages.len());
        prop_assert_eq!(analyzer.fetch_stats(&messages, &filter).messages, messages.len());
    }

    /// Per-user counts add up to the overall count
    #[test]
    fn per_user_counts_partition_overall(entries in arb_transcript(40)) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        let analyzer = analyzer();
        let users = analyzer.users(&messages);

        let mut total = messages.iter().filter(|m| m.is_group_notification()).count();
        for user in users.iter().skip(1) {
            total += analyzer.fetch_stats(&messages, &UserFilter::from_selection(user)).messages;
        }
        prop_assert_eq!(total, messages.len());
    }

    /// Running the pipeline twice gives identical results
    #[test]
    fn pipeline_is_idempotent(entries in arb_transcript(20)) {
        let text = render(&entries);
        let first = TranscriptParser::new().parse_str(&text).unwrap();
        let second = TranscriptParser::new().parse_str(&text).unwrap();
        prop_assert_eq!(&first, &second);

        let analyzer = analyzer();
        prop_assert_eq!(
            analyzer.report(&first, &UserFilter::Overall),
            analyzer.report(&second, &UserFilter::Overall)
        );
    }
}
