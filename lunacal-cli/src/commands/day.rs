use anyhow::Result;
use lunacal_core::activity;
use owo_colors::OwoColorize;

use crate::commands::{load_context, parse_date};
use crate::render::{Render, format_date_fr};

pub fn run(date: Option<String>) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let date = match date {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };

    let (_config, store) = load_context()?;
    let cycle = store.load_cycle_config(today);
    let history = store.load_history();

    let cycle_day = cycle.cycle_day_for(date, &history);
    let info = cycle.phase_for(date, &history);
    let moon = lunacal_core::moon::moon_info(date);

    println!("{}", format_date_fr(date).bold());
    println!("J{} {}", cycle_day, info.render());
    println!("{}", info.description.italic());
    println!("{}", moon.render());

    let snapshot = store.load_activities();
    let mut todays: Vec<_> = snapshot
        .activities
        .iter()
        .filter(|a| a.date == date && a.on_calendar())
        .cloned()
        .collect();

    if todays.is_empty() {
        println!();
        println!("{}", "No events or tasks".dimmed());
        return Ok(());
    }

    activity::sort_for_display(&mut todays);
    println!();
    for entry in &todays {
        println!("  {}", entry.render());
    }

    Ok(())
}
