//! Parsed transcript record.
//!
//! This module provides [`Message`], one row of the parsed transcript table.
//! Besides the raw `timestamp`, `sender` and `body`, every record carries the
//! calendar fields the aggregation layer groups by. They are computed once in
//! [`Message::new`] and never change afterwards.
//!
//! # Examples
//!
//! ```
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello!");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.month(), "March");
//! assert_eq!(msg.day_name(), "Saturday");
//! assert_eq!(msg.period(), "23-00");
//! ```
//!
//! ## Serialization
//!
//! Records serialize with all derived columns. Deserialization only reads
//! `timestamp`, `sender` and `body` and recomputes the rest, so a decoded
//! record is always internally consistent.
//!
//! ```
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "hello world");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Sender assigned to group events (joins, leaves, title changes).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Sender assigned to platform notices such as the business security preamble.
pub const SYSTEM_NOTIFICATION: &str = "system_notification";

/// Body WhatsApp writes in place of an attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English name of a month, `month` being 1-based.
///
/// Out-of-range values yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Label of the one-hour bucket starting at `hour`.
///
/// | Hour | Label |
/// |------|-------|
/// | 0 | `00-01` |
/// | 9 | `9-10` |
/// | 23 | `23-00` |
///
/// ```
/// use chatstat::message::hour_bucket;
///
/// assert_eq!(hour_bucket(0), "00-01");
/// assert_eq!(hour_bucket(9), "9-10");
/// assert_eq!(hour_bucket(23), "23-00");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    match hour {
        0 => "00-01".to_string(),
        23 => "23-00".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// One parsed transcript entry.
///
/// | Column | Type | Description |
/// |--------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the entry was written |
/// | `sender` | `String` | Participant name or a notification sentinel |
/// | `body` | `String` | Message text, possibly empty |
/// | `date` | `NaiveDate` | Calendar date of `timestamp` |
/// | `year`, `month_num`, `day` | numbers | Date parts |
/// | `month`, `day_name` | `&str` | English month and weekday names |
/// | `hour`, `minute` | numbers | Time parts |
/// | `period` | `String` | Hour-bucket label, see [`hour_bucket`] |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMessage")]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    date: NaiveDate,
    year: i32,
    month_num: u32,
    #[serde(skip_deserializing)]
    month: &'static str,
    day: u32,
    #[serde(skip_deserializing)]
    day_name: &'static str,
    hour: u32,
    minute: u32,
    period: String,
}

/// Wire shape accepted when deserializing; derived columns are recomputed.
#[derive(Deserialize)]
struct RawMessage {
    timestamp: NaiveDateTime,
    sender: String,
    #[serde(default)]
    body: String,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        Message::new(raw.timestamp, raw.sender, raw.body)
    }
}

impl Message {
    /// Creates a record and computes every derived calendar field.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            date,
            year: date.year(),
            month_num: date.month(),
            month: month_name(date.month()),
            day: date.day(),
            day_name: weekday_name(date.weekday()),
            hour,
            minute: timestamp.minute(),
            period: hour_bucket(hour),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 to 12.
    pub fn month_num(&self) -> u32 {
        self.month_num
    }

    /// English month name, e.g. `"January"`.
    pub fn month(&self) -> &'static str {
        self.month
    }

    /// Day of month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// English weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        self.day_name
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Hour-bucket label, e.g. `"9-10"`.
    pub fn period(&self) -> &str {
        &self.period
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for group events (joins, leaves, title changes).
    pub fn is_group_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` for platform notices.
    pub fn is_system_notification(&self) -> bool {
        self.sender == SYSTEM_NOTIFICATION
    }

    /// Returns `true` for either kind of notification.
    pub fn is_notification(&self) -> bool {
        self.is_group_notification() || self.is_system_notification()
    }

    /// Returns `true` if the body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let msg = Message::new(at(2025, 3, 2, 9, 30), "Alice", "Hi");
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert_eq!(msg.year(), 2025);
        assert_eq!(msg.month_num(), 3);
        assert_eq!(msg.month(), "March");
        assert_eq!(msg.day(), 2);
        assert_eq!(msg.day_name(), "Sunday");
        assert_eq!(msg.hour(), 9);
        assert_eq!(msg.minute(), 30);
        assert_eq!(msg.period(), "9-10");
    }

    #[test]
    fn test_hour_bucket_wraparound() {
        assert_eq!(hour_bucket(0), "00-01");
        assert_eq!(hour_bucket(1), "1-2");
        assert_eq!(hour_bucket(12), "12-13");
        assert_eq!(hour_bucket(22), "22-23");
        assert_eq!(hour_bucket(23), "23-00");
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_notification_predicates() {
        let ts = at(2024, 1, 1, 0, 0);
        let group = Message::new(ts, GROUP_NOTIFICATION, "Bob joined");
        assert!(group.is_group_notification());
        assert!(group.is_notification());
        assert!(!group.is_system_notification());

        let system = Message::new(ts, SYSTEM_NOTIFICATION, "This business uses...");
        assert!(system.is_system_notification());
        assert!(system.is_notification());

        let user = Message::new(ts, "Alice", MEDIA_OMITTED);
        assert!(!user.is_notification());
        assert!(user.is_media());
    }

    #[test]
    fn test_is_empty() {
        let ts = at(2024, 1, 1, 0, 0);
        assert!(Message::new(ts, "Alice", "").is_empty());
        assert!(Message::new(ts, "Alice", "   ").is_empty());
        assert!(!Message::new(ts, "Alice", "Hello").is_empty());
    }

    #[test]
    fn test_serialization_includes_derived_columns() {
        let msg = Message::new(at(2024, 1, 1, 0, 5), "Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"Alice\""));
        assert!(json.contains("\"day_name\":\"Monday\""));
        assert!(json.contains("\"period\":\"00-01\""));
    }

    #[test]
    fn test_deserialization_recomputes_derived_columns() {
        let json = r#"{"timestamp":"2024-06-15T23:10:00","sender":"Bob","body":"Hi","month":"bogus"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.month(), "June");
        assert_eq!(msg.day_name(), "Saturday");
        assert_eq!(msg.period(), "23-00");
    }
}
