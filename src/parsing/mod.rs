//! Shared parsing utilities.
//!
//! This module contains the low-level pieces the transcript parser is built
//! from: entry splitting, date format detection and sender classification.

pub mod transcript;

// Re-export commonly used items
pub use transcript::{
    DateFormat, Entries, NARROW_NBSP, SplitEntry, detect_date_format, split_entries, split_sender,
};
