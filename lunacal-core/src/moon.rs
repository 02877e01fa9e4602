//! Lunar phase lookup.
//!
//! Lunar age is measured from a reference new moon, wrapped to the
//! mean synodic month, and split into eight equal phase buckets.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Mean length of a synodic month, in days.
pub const LUNAR_CYCLE_DAYS: f64 = 29.530_588_67;

const MOON_EMOJIS: [&str; 8] = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];

const MOON_NAMES: [&str; 8] = [
    "Nouvelle lune",
    "Premier croissant",
    "Premier quartier",
    "Gibbeuse croissante",
    "Pleine lune",
    "Gibbeuse décroissante",
    "Dernier quartier",
    "Dernier croissant",
];

/// Phase of the moon on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonInfo {
    pub emoji: &'static str,
    pub name: &'static str,
    /// Days since the last new moon, rounded to a tenth.
    pub age: f64,
}

fn reference_new_moon() -> DateTime<Utc> {
    // The new moon of 2025-10-21, 13:25 UTC.
    Utc.with_ymd_and_hms(2025, 10, 21, 13, 25, 0).unwrap()
}

/// Moon phase for a calendar day, taken at midnight UTC.
pub fn moon_info(date: NaiveDate) -> MoonInfo {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc();

    let elapsed = midnight - reference_new_moon();
    let days = elapsed.num_seconds() as f64 / 86_400.0;
    let age = days.rem_euclid(LUNAR_CYCLE_DAYS);

    let phase = (((age / LUNAR_CYCLE_DAYS) * 8.0).floor() as usize).min(7);

    MoonInfo {
        emoji: MOON_EMOJIS[phase],
        name: MOON_NAMES[phase],
        age: (age * 10.0).round() / 10.0,
    }
}
