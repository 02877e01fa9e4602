//! Cycle history: past start dates and the lengths derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hard cap on stored history entries.
pub const MAX_HISTORY_ENTRIES: usize = 12;

/// One past cycle, as persisted in the history file.
///
/// `length` is never entered by hand; it is always re-derived as the
/// gap to the next chronologically later start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleHistoryEntry {
    /// Start date as entered, `YYYY-MM-DD`.
    pub start_date: String,
    /// Whole days until the next cycle began.
    pub length: u32,
}

impl CycleHistoryEntry {
    pub fn parsed_start(&self) -> Option<NaiveDate> {
        parse_start_date(&self.start_date)
    }
}

fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Derive cycle lengths from raw start dates.
///
/// Entries that are empty or unparseable are dropped, the rest are
/// sorted ascending, and each entry's length is the whole-day gap to
/// the start of the *next* cycle (for the most recent entry, to
/// `current_cycle_start`). The sorted order is what gets persisted and
/// averaged, whatever order the dates came in.
pub fn derive_lengths(raw_dates: &[String], current_cycle_start: NaiveDate) -> Vec<CycleHistoryEntry> {
    let mut starts: Vec<NaiveDate> = raw_dates
        .iter()
        .filter(|raw| !raw.trim().is_empty())
        .filter_map(|raw| parse_start_date(raw))
        .collect();
    starts.sort();

    starts
        .iter()
        .enumerate()
        .map(|(i, start)| {
            let next = starts.get(i + 1).copied().unwrap_or(current_cycle_start);
            CycleHistoryEntry {
                start_date: start.format("%Y-%m-%d").to_string(),
                // A current start older than the last entry would go
                // negative; clamp rather than wrap.
                length: (next - *start).num_days().max(0) as u32,
            }
        })
        .collect()
}
