use anyhow::{Result, bail};
use chrono::Local;
use lunacal_core::app_config::AppConfig;
use lunacal_core::cycle::history::derive_lengths;
use lunacal_core::cycle::{MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH};
use owo_colors::OwoColorize;

use crate::commands::{load_context, parse_date};

pub fn run_show() -> Result<()> {
    let today = Local::now().date_naive();
    let config_path = AppConfig::config_path()?;
    let (config, store) = load_context()?;
    let cycle = store.load_cycle_config(today);
    let history = store.load_history();

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", store.root().display());
    println!();

    println!("{}", "Cycle".bold());
    match cycle.cycle_start_date {
        Some(start) => println!("  Start date:  {}", start),
        None => println!("  Start date:  {}", "not set".dimmed()),
    }
    println!("  Length:      {} days", cycle.cycle_length);
    if !history.is_empty() {
        println!(
            "  Effective:   {} days (average of {} recorded cycles)",
            cycle.effective_length(&history),
            history.len()
        );
    }
    println!("  Today:       J{}", cycle.cycle_day_for(today, &history));
    println!();
    println!("  Default view: {}", config.default_view);

    Ok(())
}

pub fn run_set(start: Option<String>, length: Option<u32>) -> Result<()> {
    if start.is_none() && length.is_none() {
        bail!("Nothing to change. Pass --start and/or --length");
    }

    let today = Local::now().date_naive();
    let (_config, store) = load_context()?;
    let mut cycle = store.load_cycle_config(today);

    if let Some(raw) = start {
        cycle.cycle_start_date = Some(parse_date(&raw)?);
    }
    if let Some(length) = length {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&length) {
            bail!(
                "Cycle length must be between {} and {} days (got {})",
                MIN_CYCLE_LENGTH,
                MAX_CYCLE_LENGTH,
                length
            );
        }
        cycle.cycle_length = length;
    }
    store.save_cycle_config(&cycle)?;

    // Recorded lengths are measured against the current start date, so a
    // new start changes the most recent entry's length.
    if let Some(start) = cycle.cycle_start_date {
        let raw: Vec<String> = store
            .load_history()
            .iter()
            .map(|entry| entry.start_date.clone())
            .collect();
        store.save_history(&derive_lengths(&raw, start))?;
    }

    let history = store.load_history();
    match cycle.cycle_start_date {
        Some(date) => println!(
            "Cycle starts {} · {} day cycle · J{} today",
            date,
            cycle.effective_length(&history),
            cycle.cycle_day_for(today, &history)
        ),
        None => println!("Cycle length set to {} days", cycle.cycle_length),
    }

    Ok(())
}
