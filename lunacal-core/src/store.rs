//! Durable local state: cycle configuration, history, synced activities.
//!
//! Three JSON files under one directory, written atomically
//! (temp file + rename, last write wins). Loads never fail: a missing
//! or unreadable file falls back to defaults so the views always have
//! data to draw.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::activity::Activity;
use crate::cycle::CycleConfig;
use crate::cycle::history::CycleHistoryEntry;
use crate::error::{LunacalError, LunacalResult};

const CYCLE_CONFIG_FILE: &str = "cycle_config.json";
const CYCLE_HISTORY_FILE: &str = "cycle_history.json";
const ACTIVITIES_FILE: &str = "activities.json";

/// What the last provider sync brought back, and when.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    pub synced_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// File-backed store rooted at one directory.
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    /// Default store location (e.g. `~/.local/share/lunacal`), used when
    /// the config sets no `data_dir`.
    pub fn default_root() -> LunacalResult<PathBuf> {
        let root = dirs::data_dir()
            .ok_or_else(|| LunacalError::Store("Could not determine data directory".into()))?
            .join("lunacal");

        Ok(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The cycle config, or a 28-day cycle starting today when nothing
    /// usable has been saved yet.
    pub fn load_cycle_config(&self, today: NaiveDate) -> CycleConfig {
        self.read_json(CYCLE_CONFIG_FILE)
            .unwrap_or_else(|| CycleConfig::default_for(today))
    }

    pub fn save_cycle_config(&self, config: &CycleConfig) -> LunacalResult<()> {
        self.write_json(CYCLE_CONFIG_FILE, config)
    }

    pub fn load_history(&self) -> Vec<CycleHistoryEntry> {
        self.read_json(CYCLE_HISTORY_FILE).unwrap_or_default()
    }

    pub fn save_history(&self, history: &[CycleHistoryEntry]) -> LunacalResult<()> {
        self.write_json(CYCLE_HISTORY_FILE, &history)
    }

    pub fn load_activities(&self) -> ActivitySnapshot {
        self.read_json(ACTIVITIES_FILE).unwrap_or_default()
    }

    pub fn save_activities(&self, snapshot: &ActivitySnapshot) -> LunacalResult<()> {
        self.write_json(ACTIVITIES_FILE, snapshot)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let content = std::fs::read_to_string(self.root.join(file)).ok()?;
        serde_json::from_str(&content).ok()
    }

    // Write to a sibling temp file first so a crash mid-write never
    // leaves a truncated state file behind.
    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> LunacalResult<()> {
        std::fs::create_dir_all(&self.root)?;

        let path = self.root.join(file);
        let temp = self.root.join(format!("{file}.tmp"));

        let content = serde_json::to_string_pretty(value)
            .map_err(|e| LunacalError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;

        Ok(())
    }
}
