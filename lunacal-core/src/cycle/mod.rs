//! Cycle configuration and day/phase lookups.

pub mod history;
pub mod math;
pub mod phase;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cycle::history::CycleHistoryEntry;
use crate::cycle::math::DEFAULT_CYCLE_LENGTH;
use crate::cycle::phase::PhaseInfo;

/// Soft domain for a configured cycle length, enforced where the user
/// enters it. The math itself accepts anything.
pub const MIN_CYCLE_LENGTH: u32 = 21;
pub const MAX_CYCLE_LENGTH: u32 = 35;

/// Cycle configuration as persisted in the store.
///
/// `cycle_start_date` is day 1 of the cycle currently underway. It is
/// only `None` before the very first configuration; lookups fall back
/// to day 1 rather than erroring so the views always have something to
/// draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleConfig {
    pub cycle_length: u32,
    pub cycle_start_date: Option<NaiveDate>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            cycle_length: DEFAULT_CYCLE_LENGTH,
            cycle_start_date: None,
        }
    }
}

impl CycleConfig {
    /// Config used when nothing has been saved yet: 28 days, starting today.
    pub fn default_for(today: NaiveDate) -> Self {
        CycleConfig {
            cycle_length: DEFAULT_CYCLE_LENGTH,
            cycle_start_date: Some(today),
        }
    }

    /// Cycle length in effect: the history average once any history
    /// exists, the configured length otherwise.
    pub fn effective_length(&self, history: &[CycleHistoryEntry]) -> u32 {
        if history.is_empty() {
            self.cycle_length
        } else {
            math::average_cycle_length(history)
        }
    }

    /// Cycle day for `date`; day 1 when no start date is configured.
    pub fn cycle_day_for(&self, date: NaiveDate, history: &[CycleHistoryEntry]) -> u32 {
        match self.cycle_start_date {
            Some(start) => math::cycle_day_for_date(date, start, self.effective_length(history)),
            None => 1,
        }
    }

    /// Phase classification for `date`.
    pub fn phase_for(&self, date: NaiveDate, history: &[CycleHistoryEntry]) -> PhaseInfo {
        phase::phase_info(
            self.cycle_day_for(date, history),
            self.effective_length(history),
        )
    }
}
