use anyhow::{Result, bail};
use chrono::Local;
use lunacal_core::cycle::history::{MAX_HISTORY_ENTRIES, derive_lengths};
use lunacal_core::cycle::math::average_cycle_length;
use owo_colors::OwoColorize;

use crate::commands::{load_context, parse_date};

pub fn run_list() -> Result<()> {
    let (_config, store) = load_context()?;
    let history = store.load_history();

    if history.is_empty() {
        println!("{}", "No recorded cycles".dimmed());
        println!("Record one with `lunacal history add YYYY-MM-DD`");
        return Ok(());
    }

    println!("{}", "Recorded cycles".bold());
    for entry in &history {
        println!("  {}  {:>2} days", entry.start_date, entry.length);
    }
    println!();
    println!(
        "Average length: {} days over {} cycles",
        average_cycle_length(&history),
        history.len()
    );

    Ok(())
}

pub fn run_add(date: String) -> Result<()> {
    let start = parse_date(&date)?;
    let formatted = start.format("%Y-%m-%d").to_string();
    let today = Local::now().date_naive();
    let (_config, store) = load_context()?;

    let history = store.load_history();
    if history.len() >= MAX_HISTORY_ENTRIES {
        bail!(
            "History is full ({} entries). Remove one with `lunacal history remove YYYY-MM-DD` first",
            MAX_HISTORY_ENTRIES
        );
    }
    if history.iter().any(|entry| entry.start_date == formatted) {
        bail!("A cycle starting {} is already recorded", formatted);
    }

    let cycle = store.load_cycle_config(today);
    let current_start = cycle.cycle_start_date.unwrap_or(today);

    let mut raw: Vec<String> = history.iter().map(|entry| entry.start_date.clone()).collect();
    raw.push(formatted.clone());
    let derived = derive_lengths(&raw, current_start);
    store.save_history(&derived)?;

    match derived.iter().find(|entry| entry.start_date == formatted) {
        Some(entry) => println!(
            "Recorded cycle starting {} ({} days)",
            entry.start_date, entry.length
        ),
        None => println!("Recorded cycle starting {}", formatted),
    }
    println!("Average length is now {} days", average_cycle_length(&derived));

    Ok(())
}

pub fn run_remove(date: String) -> Result<()> {
    let start = parse_date(&date)?;
    let formatted = start.format("%Y-%m-%d").to_string();
    let today = Local::now().date_naive();
    let (_config, store) = load_context()?;

    let history = store.load_history();
    let raw: Vec<String> = history
        .iter()
        .map(|entry| entry.start_date.clone())
        .filter(|recorded| *recorded != formatted)
        .collect();
    if raw.len() == history.len() {
        bail!("No recorded cycle starts on {}", formatted);
    }

    let cycle = store.load_cycle_config(today);
    let current_start = cycle.cycle_start_date.unwrap_or(today);
    store.save_history(&derive_lengths(&raw, current_start))?;
    println!("Removed the cycle starting {}", formatted);

    Ok(())
}

pub fn run_clear() -> Result<()> {
    let (_config, store) = load_context()?;
    store.save_history(&[])?;
    println!("Cleared all recorded cycles");

    Ok(())
}
