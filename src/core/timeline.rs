//! Activity over time: timelines, weekday/month tables and the heatmap.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::Message;
use crate::core::counter::{Frequency, rank_by_count};
use crate::core::filter::UserFilter;
use crate::message::{hour_bucket, weekday_name};

/// Message count of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    /// `"{Month}-{year}"`, e.g. `"March-2024"`.
    pub label: String,
    pub messages: usize,
}

/// Message count of one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Per-month counts in chronological order.
pub fn monthly_timeline(messages: &[Message], filter: &UserFilter) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (&'static str, usize)> = BTreeMap::new();
    for msg in filter.select(messages) {
        months
            .entry((msg.year(), msg.month_num()))
            .or_insert((msg.month(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), (month, messages))| MonthlyPoint {
            year,
            month_num,
            month,
            label: format!("{month}-{year}"),
            messages,
        })
        .collect()
}

/// Per-date counts in chronological order.
pub fn daily_timeline(messages: &[Message], filter: &UserFilter) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in filter.select(messages) {
        *days.entry(msg.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}

/// Counts per weekday name, busiest first.
pub fn week_activity_map(messages: &[Message], filter: &UserFilter) -> Frequency {
    label_counts(filter.select(messages).map(Message::day_name))
}

/// Counts per month name, busiest first.
pub fn month_activity_map(messages: &[Message], filter: &UserFilter) -> Frequency {
    label_counts(filter.select(messages).map(Message::month))
}

fn label_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Frequency {
    rank_by_count(labels)
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

/// Weekday by hour-bucket message counts.
///
/// Only weekdays and hours that occur are present. Rows run Monday to
/// Sunday, columns by hour of day; absent combinations are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Weekday names.
    pub rows: Vec<String>,
    /// Hour-bucket labels.
    pub columns: Vec<String>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for a weekday name and hour-bucket label; zero if either is absent.
    pub fn get(&self, day_name: &str, period: &str) -> usize {
        let Some(row) = self.rows.iter().position(|r| r == day_name) else {
            return 0;
        };
        let Some(column) = self.columns.iter().position(|c| c == period) else {
            return 0;
        };
        self.counts
            .get(row)
            .and_then(|counts| counts.get(column))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Builds the weekday by hour heatmap of the selected records.
pub fn activity_heatmap(messages: &[Message], filter: &UserFilter) -> Heatmap {
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for msg in filter.select(messages) {
        let weekday = msg.date().weekday().num_days_from_monday();
        *cells.entry((weekday, msg.hour())).or_default() += 1;
    }

    let mut weekdays: Vec<u32> = cells.keys().map(|&(day, _)| day).collect();
    weekdays.dedup();
    let mut hours: Vec<u32> = cells.keys().map(|&(_, hour)| hour).collect();
    hours.sort_unstable();
    hours.dedup();

    let counts = weekdays
        .iter()
        .map(|&day| {
            hours
                .iter()
                .map(|&hour| cells.get(&(day, hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        rows: weekdays
            .into_iter()
            .map(|day| weekday_name(weekday_from_index(day)).to_string())
            .collect(),
        columns: hours.into_iter().map(hour_bucket).collect(),
        counts,
    }
}

/// Inverse of `Weekday::num_days_from_monday`.
fn weekday_from_index(index: u32) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}
