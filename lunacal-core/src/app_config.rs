//! Global lunacal configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{LunacalError, LunacalResult};
use crate::remote::Remote;
use crate::store::Store;

/// Number of days to sync in each direction (past and future).
pub const DEFAULT_SYNC_DAYS: i64 = 30;

fn default_view() -> String {
    "cycle".to_string()
}

fn default_sync_days() -> i64 {
    DEFAULT_SYNC_DAYS
}

/// Global configuration at ~/.config/lunacal/config.toml
///
/// Provider-specific keys (account, calendar id, task list id) live in
/// the `[remote]` table and are passed through to the provider binary
/// untouched.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// View a bare `lunacal` invocation opens: "cycle" or "month".
    #[serde(default = "default_view")]
    pub default_view: String,

    #[serde(default = "default_sync_days")]
    pub sync_days: i64,

    /// Where cycle data and synced activities are stored. Defaults to
    /// the platform data directory.
    pub data_dir: Option<PathBuf>,

    pub remote: Option<Remote>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_view: default_view(),
            sync_days: DEFAULT_SYNC_DAYS,
            data_dir: None,
            remote: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> LunacalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LunacalError::Config("Could not determine config directory".into()))?
            .join("lunacal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> LunacalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| LunacalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LunacalError::Config(e.to_string()))
    }

    /// Resolve the store directory, expanding `~` in an override.
    pub fn store_path(&self) -> LunacalResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
            return Ok(PathBuf::from(expanded));
        }

        Store::default_root()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> LunacalResult<()> {
        let contents = "\
# lunacal configuration

# View a bare `lunacal` invocation opens (\"cycle\" or \"month\"):
# default_view = \"cycle\"

# How many days to sync in each direction:
# sync_days = 30

# Where cycle data and synced activities are stored:
# data_dir = \"~/.local/share/lunacal\"

# Calendar/task provider to sync with. Keys other than `provider` are
# passed through to the provider binary as-is.
# [remote]
# provider = \"google\"
# google_account = \"you@example.com\"
# google_calendar_id = \"primary\"
# google_task_list_id = \"@default\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LunacalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LunacalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_opens_the_cycle_view() {
        let config = AppConfig::default();
        assert_eq!(config.default_view, "cycle");
        assert_eq!(config.sync_days, 30);
        assert!(config.remote.is_none());
    }

    #[test]
    fn store_path_override_expands_tilde() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("~/cycle-data")),
            ..AppConfig::default()
        };

        let path = config.store_path().unwrap();
        assert!(path.ends_with("cycle-data"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("cycle-data"));
        }
    }

    #[test]
    fn default_store_path_is_the_store_default() {
        let config = AppConfig::default();
        if let Some(data_dir) = dirs::data_dir() {
            let path = config.store_path().unwrap();
            assert_eq!(path, Store::default_root().unwrap());
            assert_eq!(path, data_dir.join("lunacal"));
        }
    }

    #[test]
    fn remote_table_deserializes_with_passthrough_keys() {
        let raw = r#"
            default_view = "month"

            [remote]
            provider = "google"
            google_account = "you@example.com"
            google_calendar_id = "primary"
        "#;

        let config: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.default_view, "month");

        let remote = config.remote.expect("remote should parse");
        assert_eq!(remote.provider.name(), "google");
        assert_eq!(
            remote.config.0.get("google_account").and_then(|v| v.as_str()),
            Some("you@example.com")
        );
    }

    #[test]
    fn generated_default_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        AppConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.default_view, "cycle");
        assert!(config.remote.is_none());
    }
}
