//! TUI rendering traits for lunacal types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to lunacal-core types using owo_colors.

use chrono::{Datelike, NaiveDate};
use lunacal_core::activity::Activity;
use lunacal_core::cycle::phase::{PaletteColor, PhaseInfo};
use lunacal_core::moon::MoonInfo;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Parse a `#rgb` or `#rrggbb` hex color into channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// A one-glyph color swatch for terminals with truecolor support.
pub fn swatch(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

impl Render for PhaseInfo {
    fn render(&self) -> String {
        let dot = match self.color {
            PaletteColor::Flat(hex) => swatch(hex),
            PaletteColor::Blend { from, to } => format!("{}{}", swatch(from), swatch(to)),
        };
        format!("{} {} ({})", dot, self.name().bold(), self.short_name)
    }
}

impl Render for MoonInfo {
    fn render(&self) -> String {
        format!("{} {} ({:.1} j)", self.emoji, self.name, self.age)
    }
}

impl Render for Activity {
    fn render(&self) -> String {
        if self.is_task() {
            let marker = format!("{:>7}", if self.completed { "✓" } else { "○" });
            if self.completed {
                format!("{} {}", marker.green(), self.title.dimmed())
            } else {
                format!("{} {}", marker, self.title)
            }
        } else {
            let time = match self.start_time {
                Some(t) => format!("{:>7}", t.format("%H:%M")),
                None => format!("{:>7}", "all-day"),
            };
            format!("{} {}", time.dimmed(), self.title)
        }
    }
}

pub const WEEKDAYS_SHORT: [&str; 7] = ["DIM", "LUN", "MAR", "MER", "JEU", "VEN", "SAM"];

const WEEKDAYS_FULL: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format a date the way the views label days (e.g. "jeudi 21 août 2025").
pub fn format_date_fr(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_FULL[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[(date.month() - 1) as usize];
    format!("{} {} {} {}", weekday, date.day(), month, date.year())
}

/// Capitalized month header (e.g. "Août 2025").
pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTHS[(month - 1) as usize];
    let mut chars = name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{} {}", capitalized, year)
}
