use anyhow::{Result, anyhow, bail, ensure};
use lunacal_core::remote::protocol::EventPayload;
use owo_colors::OwoColorize;

use crate::commands::sync::refresh;
use crate::commands::{load_context, parse_date, parse_time, require_remote};
use crate::utils::tui::create_spinner;

pub async fn run_new(
    title: String,
    date: String,
    start: String,
    end: String,
    calendar: Option<String>,
) -> Result<()> {
    let date = parse_date(&date)?;
    let start = parse_time(&start)?;
    let end = parse_time(&end)?;
    ensure!(end > start, "End time must be after start time");

    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;

    let payload = EventPayload {
        id: None,
        title,
        date: date.format("%Y-%m-%d").to_string(),
        start_time: Some(start.format("%H:%M").to_string()),
        end_time: Some(end.format("%H:%M").to_string()),
        calendar_id: calendar,
        timezone: iana_time_zone::get_timezone().ok(),
    };

    let spinner = create_spinner(format!("Creating '{}'", payload.title));
    let result = remote.create_event(&payload).await;
    spinner.finish_and_clear();
    let created = result?;

    println!("Created {} on {}", created.title.bold(), created.date);
    refresh(&store, &config).await
}

pub async fn run_edit(
    id: String,
    title: Option<String>,
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    if title.is_none() && date.is_none() && start.is_none() && end.is_none() {
        bail!("Nothing to change. Pass --title, --date, --start and/or --end");
    }

    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;

    let snapshot = store.load_activities();
    let existing = snapshot
        .activities
        .iter()
        .find(|a| a.id == id && !a.is_task())
        .ok_or_else(|| anyhow!("No synced event with id '{}'. Run `lunacal sync` and retry", id))?;

    let date = match date {
        Some(raw) => parse_date(&raw)?,
        None => existing.date,
    };
    let start_time = match start {
        Some(raw) => Some(parse_time(&raw)?),
        None => existing.start_time,
    };
    let end_time = match end {
        Some(raw) => Some(parse_time(&raw)?),
        None => existing.end_time,
    };
    if let (Some(start), Some(end)) = (start_time, end_time) {
        ensure!(end > start, "End time must be after start time");
    }

    let payload = EventPayload {
        id: Some(id),
        title: title.unwrap_or_else(|| existing.title.clone()),
        date: date.format("%Y-%m-%d").to_string(),
        start_time: start_time.map(|t| t.format("%H:%M").to_string()),
        end_time: end_time.map(|t| t.format("%H:%M").to_string()),
        calendar_id: existing.calendar_id.clone(),
        timezone: iana_time_zone::get_timezone().ok(),
    };

    let spinner = create_spinner(format!("Updating '{}'", payload.title));
    let result = remote.update_event(&payload).await;
    spinner.finish_and_clear();
    let updated = result?;

    println!("Updated {}", updated.title.bold());
    refresh(&store, &config).await
}

pub async fn run_delete(id: String) -> Result<()> {
    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;

    // The provider needs the calendar the event lives on; look it up in
    // the cached snapshot and fall back to the provider's default.
    let snapshot = store.load_activities();
    let calendar_id = snapshot
        .activities
        .iter()
        .find(|a| a.id == id && !a.is_task())
        .and_then(|a| a.calendar_id.clone());

    let spinner = create_spinner("Deleting event".to_string());
    let result = remote.delete_event(&id, calendar_id.as_deref()).await;
    spinner.finish_and_clear();
    result?;

    println!("Deleted event {}", id);
    refresh(&store, &config).await
}
