//! Day selection state for the wheel view.

use chrono::NaiveDate;

use crate::cycle::math;

/// Which day wedge is active for detail display.
///
/// A selection indexes into the day space of the configuration it was
/// made under, so callers clear it whenever the cycle configuration
/// changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WheelSelection {
    selected: Option<u32>,
}

impl WheelSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The day whose detail is shown: the selection, or today's day.
    pub fn display_day(&self, current_day: u32) -> u32 {
        self.selected.unwrap_or(current_day)
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Select a wedge, returning the calendar date it stands for.
    pub fn select(&mut self, day: u32, today: NaiveDate, current_day: u32) -> NaiveDate {
        self.selected = Some(day);
        math::date_for_cycle_day(day, today, current_day)
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}
