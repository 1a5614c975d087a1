//! Output format writers.
//!
//! This module provides writers for the parsed record table and the report:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter, one row per record - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//! - [`write_report`] / [`report_to_json`] - the aggregated [`Report`](crate::core::Report) as JSON - requires `json-output` feature
//!
//! Every format carries the same columns:
//! `timestamp`, `sender`, `body`, `date`, `year`, `month_num`, `month`,
//! `day`, `day_name`, `hour`, `minute`, `period`.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_csv, write_json, write_jsonl};
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new(ts, "Alice", "Hello!"),
//!     Message::new(ts, "Bob", "Hi there!"),
//! ];
//!
//! write_csv(&messages, "output.csv")?;
//! write_json(&messages, "output.json")?;
//! write_jsonl(&messages, "output.jsonl")?;
//!
//! let csv_string = to_csv(&messages)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json, write_report};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used by the text-based formats.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
