//! Cycle-day arithmetic.
//!
//! Days are numbered 1..=length. The mapping from calendar dates wraps
//! modulo the cycle length, so any date (past or future) lands on a day.

use chrono::{Duration, NaiveDate};

use crate::cycle::history::CycleHistoryEntry;

/// Fallback cycle length used before anything has been configured and
/// as the average of an empty history.
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Cycle day (1..=length) for `date`, counting from `cycle_start` as day 1.
///
/// A multiple-of-length gap yields `cycle_length`, not 0, so
/// `cycle_start` itself is day `cycle_length` and the following day is
/// day 1. Dates before `cycle_start` wrap the same way.
pub fn cycle_day_for_date(date: NaiveDate, cycle_start: NaiveDate, cycle_length: u32) -> u32 {
    if cycle_length == 0 {
        return 1;
    }

    let elapsed = (date - cycle_start).num_days();
    let day = elapsed.rem_euclid(i64::from(cycle_length));

    if day == 0 { cycle_length } else { day as u32 }
}

/// Inverse of [`cycle_day_for_date`] relative to today: the calendar
/// date that wedge `target_day` stands for when today is `current_day`.
pub fn date_for_cycle_day(target_day: u32, today: NaiveDate, current_day: u32) -> NaiveDate {
    today + Duration::days(i64::from(target_day) - i64::from(current_day))
}

/// Mean of the recorded cycle lengths, rounded half-up.
/// An empty history averages to [`DEFAULT_CYCLE_LENGTH`].
pub fn average_cycle_length(history: &[CycleHistoryEntry]) -> u32 {
    if history.is_empty() {
        return DEFAULT_CYCLE_LENGTH;
    }

    let total: u32 = history.iter().map(|entry| entry.length).sum();
    (f64::from(total) / history.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(start: &str, length: u32) -> CycleHistoryEntry {
        CycleHistoryEntry {
            start_date: start.to_string(),
            length,
        }
    }

    // --- cycle_day_for_date ---

    #[test]
    fn start_date_is_day_length_not_zero() {
        let start = date(2025, 1, 1);
        assert_eq!(cycle_day_for_date(start, start, 28), 28);
        assert_eq!(cycle_day_for_date(date(2025, 1, 2), start, 28), 1);
    }

    #[test]
    fn days_count_up_from_one() {
        let start = date(2025, 1, 1);
        assert_eq!(cycle_day_for_date(date(2025, 1, 3), start, 28), 2);
        assert_eq!(cycle_day_for_date(date(2025, 1, 15), start, 28), 14);
        assert_eq!(cycle_day_for_date(date(2025, 1, 28), start, 28), 27);
    }

    #[test]
    fn wraps_at_cycle_length() {
        let start = date(2025, 1, 1);
        // 2025-01-29 is 28 days after the start: back to day 28.
        assert_eq!(cycle_day_for_date(date(2025, 1, 29), start, 28), 28);
        assert_eq!(cycle_day_for_date(date(2025, 1, 30), start, 28), 1);
    }

    #[test]
    fn periodicity_over_many_cycles() {
        let start = date(2025, 1, 1);
        let reference = cycle_day_for_date(start, start, 28);

        for k in [-3i64, -1, 1, 2, 5, 12] {
            let shifted = start + Duration::days(k * 28);
            assert_eq!(
                cycle_day_for_date(shifted, start, 28),
                reference,
                "offset of {k} whole cycles should land on the same day"
            );
        }
    }

    #[test]
    fn dates_before_start_wrap_backwards() {
        let start = date(2025, 1, 1);
        assert_eq!(cycle_day_for_date(date(2024, 12, 31), start, 28), 27);
        assert_eq!(cycle_day_for_date(date(2024, 12, 30), start, 28), 26);
    }

    #[test]
    fn always_within_one_to_length() {
        let start = date(2025, 1, 1);
        for offset in -60i64..=60 {
            let day = cycle_day_for_date(start + Duration::days(offset), start, 28);
            assert!((1..=28).contains(&day), "day {day} out of range at offset {offset}");
        }
    }

    #[test]
    fn pure_function_same_inputs_same_output() {
        let start = date(2025, 1, 1);
        let probe = date(2025, 3, 14);
        assert_eq!(
            cycle_day_for_date(probe, start, 28),
            cycle_day_for_date(probe, start, 28)
        );
    }

    // --- date_for_cycle_day ---

    #[test]
    fn date_for_day_offsets_from_today() {
        let today = date(2025, 3, 10);
        assert_eq!(date_for_cycle_day(14, today, 10), date(2025, 3, 14));
        assert_eq!(date_for_cycle_day(3, today, 10), date(2025, 3, 3));
        assert_eq!(date_for_cycle_day(10, today, 10), today);
    }

    #[test]
    fn date_for_day_inverts_cycle_day() {
        let start = date(2025, 1, 1);
        let today = date(2025, 3, 10);
        let current = cycle_day_for_date(today, start, 28);

        for target in 1..=28 {
            let resolved = date_for_cycle_day(target, today, current);
            assert_eq!(cycle_day_for_date(resolved, start, 28), target);
        }
    }

    // --- average_cycle_length ---

    #[test]
    fn empty_history_averages_to_default() {
        assert_eq!(average_cycle_length(&[]), 28);
    }

    #[test]
    fn average_rounds_half_up() {
        let history = vec![entry("2025-01-01", 28), entry("2025-01-29", 29)];
        // 28.5 rounds up to 29.
        assert_eq!(average_cycle_length(&history), 29);

        let history = vec![
            entry("2025-01-01", 27),
            entry("2025-01-28", 28),
            entry("2025-02-25", 28),
        ];
        // 27.67 rounds to 28.
        assert_eq!(average_cycle_length(&history), 28);
    }
}
