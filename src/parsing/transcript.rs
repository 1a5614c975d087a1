//! Transcript parsing utilities.
//!
//! Entry boundaries, date format variants and the sender/body split used by
//! [`TranscriptParser`](crate::parsers::TranscriptParser).
//!
//! An export looks like this:
//!
//! ```text
//! 02/03/2025, 9:30 am - Messages and calls are end-to-end encrypted.
//! 02/03/2025, 9:31 am - Alice: Hello
//! second line of Alice's message
//! 02/03/2025, 9:32 am - Bob: <Media omitted>
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::{GROUP_NOTIFICATION, SYSTEM_NOTIFICATION};

/// Narrow no-break space some locales put before `am`/`pm`.
pub const NARROW_NBSP: char = '\u{202f}';

// dd/mm/yy[yy], h:mm[<space|U+202F>am|pm] -
// Group 1 is the timestamp without the trailing " - ".
static ENTRY_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?:(?:\s|\x{202F})(?:am|pm|AM|PM))?)\s-\s",
    )
    .expect("entry boundary pattern is valid")
});

/// Timestamp layout variants, tried in the order of [`DateFormat::all`].
///
/// A transcript is assumed to use one variant throughout: the first variant
/// that parses every timestamp of the file wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// 12-hour clock, narrow no-break space before the meridiem.
    /// Example: `02/03/2025, 9:30\u{202f}am`
    TwelveHourNarrow,
    /// 12-hour clock, ordinary space before the meridiem.
    /// Example: `02/03/2025, 9:30 am`
    TwelveHourSpace,
    /// 24-hour clock without meridiem.
    /// Example: `02/03/2025, 21:30`
    TwentyFourHour,
}

impl DateFormat {
    /// Returns all format variants in detection order.
    pub fn all() -> &'static [DateFormat] {
        &[
            DateFormat::TwelveHourNarrow,
            DateFormat::TwelveHourSpace,
            DateFormat::TwentyFourHour,
        ]
    }

    /// Returns chrono format strings for this variant, two-digit year first.
    fn chrono_formats(self) -> &'static [&'static str] {
        match self {
            DateFormat::TwelveHourNarrow | DateFormat::TwelveHourSpace => {
                &["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p"]
            }
            DateFormat::TwentyFourHour => &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
        }
    }

    /// Parses a single timestamp such as `02/03/2025, 9:30 am`.
    ///
    /// The separator before the meridiem must be exactly the one this
    /// variant expects.
    pub fn parse(self, stamp: &str) -> Option<NaiveDateTime> {
        let stamp = stamp.trim();
        let normalized = match (self, split_meridiem(stamp)) {
            (DateFormat::TwelveHourNarrow, Some((clock, NARROW_NBSP, meridiem)))
            | (DateFormat::TwelveHourSpace, Some((clock, ' ', meridiem))) => {
                format!("{clock} {meridiem}")
            }
            (DateFormat::TwentyFourHour, None) => stamp.to_string(),
            _ => return None,
        };

        self.chrono_formats()
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    }

    /// Parses every timestamp, or returns `None` if any of them fails.
    pub fn parse_all(self, stamps: &[&str]) -> Option<Vec<NaiveDateTime>> {
        stamps.iter().map(|stamp| self.parse(stamp)).collect()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::TwelveHourNarrow => write!(f, "12-hour (narrow space)"),
            DateFormat::TwelveHourSpace => write!(f, "12-hour"),
            DateFormat::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

/// Splits `9:30 am` style stamps into clock, separator and meridiem.
fn split_meridiem(stamp: &str) -> Option<(&str, char, &str)> {
    let cut = stamp.len().checked_sub(2)?;
    let meridiem = stamp.get(cut..)?;
    if !meridiem.eq_ignore_ascii_case("am") && !meridiem.eq_ignore_ascii_case("pm") {
        return None;
    }
    let head = &stamp[..cut];
    let sep = head.chars().next_back()?;
    let clock = &head[..head.len() - sep.len_utf8()];
    Some((clock, sep, meridiem))
}

/// Timestamped entries found in a transcript.
///
/// `stamps[i]` is the timestamp heading `bodies[i]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entries<'a> {
    pub stamps: Vec<&'a str>,
    pub bodies: Vec<&'a str>,
}

impl Entries<'_> {
    /// Number of complete (timestamp, body) pairs.
    pub fn len(&self) -> usize {
        self.stamps.len().min(self.bodies.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits raw transcript text on entry boundaries.
///
/// Text before the first boundary is discarded. Each body runs up to the
/// next boundary, so continuation lines of multi-line messages stay attached
/// to their entry.
pub fn split_entries(text: &str) -> Entries<'_> {
    let mut entries = Entries::default();
    let mut body_start: Option<usize> = None;

    for caps in ENTRY_BOUNDARY.captures_iter(text) {
        let (Some(whole), Some(stamp)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some(start) = body_start {
            entries.bodies.push(&text[start..whole.start()]);
        }
        entries.stamps.push(stamp.as_str());
        body_start = Some(whole.end());
    }

    if let Some(start) = body_start {
        entries.bodies.push(&text[start..]);
    }

    entries
}

/// Picks the first candidate variant that parses the whole batch.
pub fn detect_date_format(
    stamps: &[&str],
    candidates: &[DateFormat],
) -> Option<(DateFormat, Vec<NaiveDateTime>)> {
    if stamps.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find_map(|&format| format.parse_all(stamps).map(|parsed| (format, parsed)))
}

/// Sender and body of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitEntry<'a> {
    pub sender: &'a str,
    pub body: &'a str,
}

/// Separates `"<name>: <text>"` into sender and body.
///
/// The name ends at the first colon followed by whitespace. Entries without
/// a name become notifications: [`SYSTEM_NOTIFICATION`] when the text starts
/// with `security_preamble`, [`GROUP_NOTIFICATION`] otherwise.
pub fn split_sender<'a>(entry: &'a str, security_preamble: &str) -> SplitEntry<'a> {
    if let Some((name, rest)) = find_name_prefix(entry) {
        let name = name.trim();
        if !name.is_empty() {
            return SplitEntry {
                sender: name,
                body: rest.trim(),
            };
        }
    }

    let text = entry.trim();
    let sender = if !security_preamble.is_empty() && text.starts_with(security_preamble) {
        SYSTEM_NOTIFICATION
    } else {
        GROUP_NOTIFICATION
    };
    SplitEntry { sender, body: text }
}

/// Finds the first `:` (not at position 0) followed by whitespace.
fn find_name_prefix(entry: &str) -> Option<(&str, &str)> {
    let mut chars = entry.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != ':' || i == 0 {
            continue;
        }
        if let Some(&(j, next)) = chars.peek() {
            if next.is_whitespace() {
                return Some((&entry[..i], &entry[j + next.len_utf8()..]));
            }
        }
    }
    None
}
