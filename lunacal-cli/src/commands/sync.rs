use anyhow::Result;
use chrono::{Duration, Utc};
use lunacal_core::app_config::AppConfig;
use lunacal_core::remote::Remote;
use lunacal_core::store::{ActivitySnapshot, Store};

use crate::commands::{load_context, require_remote};
use crate::utils::tui::create_spinner;

pub async fn run() -> Result<()> {
    let (config, store) = load_context()?;
    let remote = require_remote(&config)?;

    let spinner = create_spinner(format!("Syncing with {}", remote.provider.name()));
    let result = fetch_snapshot(remote, config.sync_days).await;
    spinner.finish_and_clear();

    let snapshot = result?;
    store.save_activities(&snapshot)?;

    let events = snapshot.activities.iter().filter(|a| !a.is_task()).count();
    let tasks = snapshot.activities.len() - events;
    println!("Synced {} events and {} tasks", events, tasks);

    Ok(())
}

/// Pull the activity window around now from the provider.
async fn fetch_snapshot(remote: &Remote, sync_days: i64) -> Result<ActivitySnapshot> {
    let now = Utc::now();
    let activities = remote
        .activities(now - Duration::days(sync_days), now + Duration::days(sync_days))
        .await?;

    Ok(ActivitySnapshot {
        synced_at: Some(now),
        activities,
    })
}

/// Refresh the cached snapshot after a remote mutation so the views
/// pick the change up immediately.
pub(crate) async fn refresh(store: &Store, config: &AppConfig) -> Result<()> {
    if let Some(remote) = &config.remote {
        let snapshot = fetch_snapshot(remote, config.sync_days).await?;
        store.save_activities(&snapshot)?;
    }

    Ok(())
}
