use anyhow::{Result, anyhow, bail};
use lunacal_core::remote::protocol::TaskPayload;
use owo_colors::OwoColorize;

use crate::commands::sync::refresh;
use crate::commands::{load_context, parse_date, require_remote};
use crate::utils::tui::create_spinner;

pub async fn run_new(title: String, due: Option<String>, list: Option<String>) -> Result<()> {
    let due_date = match due {
        Some(raw) => Some(parse_date(&raw)?.format("%Y-%m-%d").to_string()),
        None => None,
    };

    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;

    let payload = TaskPayload {
        id: None,
        title,
        due_date,
        list_id: list,
    };

    let spinner = create_spinner(format!("Creating '{}'", payload.title));
    let result = remote.create_task(&payload).await;
    spinner.finish_and_clear();
    let created = result?;

    if created.no_due_date {
        println!("Created task {}", created.title.bold());
    } else {
        println!("Created task {} due {}", created.title.bold(), created.date);
    }
    refresh(&store, &config).await
}

pub async fn run_edit(id: String, title: Option<String>, due: Option<String>) -> Result<()> {
    if title.is_none() && due.is_none() {
        bail!("Nothing to change. Pass --title and/or --due");
    }

    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;
    let existing = find_task(&store, &id)?;

    let due_date = match due {
        Some(raw) => Some(parse_date(&raw)?.format("%Y-%m-%d").to_string()),
        None if existing.no_due_date => None,
        None => Some(existing.date.format("%Y-%m-%d").to_string()),
    };

    let payload = TaskPayload {
        id: Some(id),
        title: title.unwrap_or_else(|| existing.title.clone()),
        due_date,
        list_id: existing.list_id.clone(),
    };

    let spinner = create_spinner(format!("Updating '{}'", payload.title));
    let result = remote.update_task(&payload).await;
    spinner.finish_and_clear();
    let updated = result?;

    println!("Updated task {}", updated.title.bold());
    refresh(&store, &config).await
}

pub async fn run_done(id: String) -> Result<()> {
    set_status(id, true).await
}

pub async fn run_undo(id: String) -> Result<()> {
    set_status(id, false).await
}

pub async fn run_delete(id: String) -> Result<()> {
    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;

    let snapshot = store.load_activities();
    let list_id = snapshot
        .activities
        .iter()
        .find(|a| a.id == id && a.is_task())
        .and_then(|a| a.list_id.clone());

    let spinner = create_spinner("Deleting task".to_string());
    let result = remote.delete_task(&id, list_id.as_deref()).await;
    spinner.finish_and_clear();
    result?;

    println!("Deleted task {}", id);
    refresh(&store, &config).await
}

async fn set_status(id: String, completed: bool) -> Result<()> {
    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;
    let task = find_task(&store, &id)?;
    let title = task.title.clone();
    let list_id = task.list_id.clone();

    let spinner = create_spinner(format!("Updating '{}'", title));
    let result = remote
        .set_task_status(&id, list_id.as_deref(), completed)
        .await;
    spinner.finish_and_clear();
    result?;

    if completed {
        println!("Completed {}", title.bold());
    } else {
        println!("Reopened {}", title.bold());
    }
    refresh(&store, &config).await
}

fn find_task(store: &lunacal_core::store::Store, id: &str) -> Result<lunacal_core::Activity> {
    store
        .load_activities()
        .activities
        .into_iter()
        .find(|a| a.id == id && a.is_task())
        .ok_or_else(|| anyhow!("No synced task with id '{}'. Run `lunacal sync` and retry", id))
}
