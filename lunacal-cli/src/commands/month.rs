use std::collections::HashMap;

use anyhow::{Result, anyhow};
use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use lunacal_core::cycle::CycleConfig;
use lunacal_core::cycle::history::CycleHistoryEntry;
use lunacal_core::cycle::phase::PaletteColor;
use owo_colors::OwoColorize;

use crate::commands::{load_context, parse_month};
use crate::render::{WEEKDAYS_SHORT, month_title, swatch};

pub fn run(month: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let (year, month) = match month {
        Some(raw) => parse_month(&raw)?,
        None => (today.year(), today.month()),
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;

    let (_config, store) = load_context()?;
    let cycle = store.load_cycle_config(today);
    let history = store.load_history();
    let snapshot = store.load_activities();

    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for activity in snapshot.activities.iter().filter(|a| a.on_calendar()) {
        *counts.entry(activity.date).or_default() += 1;
    }

    println!("{}", month_title(year, month).bold());
    println!("{}", header_row());

    for week in weeks(first) {
        let mut line = String::new();
        for (i, date) in week.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let count = counts.get(date).copied().unwrap_or(0);
            line.push_str(&cell(*date, month, today, &cycle, &history, count));
        }
        println!("{}", line);
    }

    Ok(())
}

/// The month grid: whole weeks from Sunday, padded on both ends with
/// the neighboring months' days.
fn weeks(first: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let leading = i64::from(first.weekday().num_days_from_sunday());
    let rows = (leading + days_in_month(first) + 6) / 7;
    let grid_start = first - Duration::days(leading);

    (0..rows)
        .map(|row| std::array::from_fn(|dow| grid_start + Duration::days(row * 7 + dow as i64)))
        .collect()
}

fn days_in_month(first: NaiveDate) -> i64 {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days(),
        None => 31,
    }
}

fn header_row() -> String {
    WEEKDAYS_SHORT
        .iter()
        .map(|day| format!("{:^10}", day))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One fixed-width cell: day of month, cycle day, phase dot, activity
/// count. Text is padded before coloring so ANSI codes never shift
/// the columns.
fn cell(
    date: NaiveDate,
    month: u32,
    today: NaiveDate,
    cycle: &CycleConfig,
    history: &[CycleHistoryEntry],
    count: usize,
) -> String {
    let cycle_day = cycle.cycle_day_for(date, history);
    let info = cycle.phase_for(date, history);
    let fill = match info.color {
        PaletteColor::Flat(hex) => hex,
        PaletteColor::Blend { from, .. } => from,
    };

    let label = format!("{:>2} {:>3}", date.day(), format!("J{}", cycle_day));
    let label = if date == today {
        label.bold().to_string()
    } else if date.month() == month {
        label
    } else {
        label.dimmed().to_string()
    };

    let count_tag = if count > 0 {
        format!("{:>2}", count.min(99))
    } else {
        "  ".to_string()
    };

    format!("{} {}{}", label, swatch(fill), count_tag.dimmed())
}
