pub mod config;
pub mod day;
pub mod event;
pub mod history;
pub mod month;
pub mod sync;
pub mod task;
pub mod wheel;

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate, NaiveTime};
use lunacal_core::app_config::AppConfig;
use lunacal_core::remote::Remote;
use lunacal_core::store::Store;

/// Load the app config and open the activity store it points at.
pub(crate) fn load_context() -> Result<(AppConfig, Store)> {
    let config = AppConfig::load()?;
    let store = Store::open(config.store_path()?);
    Ok((config, store))
}

pub(crate) fn require_remote(config: &AppConfig) -> Result<&Remote> {
    config.remote.as_ref().ok_or_else(|| {
        let path = AppConfig::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "~/.config/lunacal/config.toml".to_string());
        anyhow!(
            "No remote configured.\n\nAdd a [remote] table to {}:\n\n  [remote]\n  provider = \"google\"",
            path
        )
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", raw))
}

/// Parse a `YYYY-MM` month argument into (year, month).
pub(crate) fn parse_month(raw: &str) -> Result<(i32, u32)> {
    let padded = format!("{}-01", raw);
    let date = NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}'. Expected YYYY-MM", raw))?;
    Ok((date.year(), date.month()))
}

pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| anyhow!("Invalid time '{}'. Expected HH:MM", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2025-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert!(parse_date("10/03/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn parses_months() {
        assert_eq!(parse_month("2025-08").unwrap(), (2025, 8));
        assert!(parse_month("2025").is_err());
        assert!(parse_month("2025-00").is_err());
    }

    #[test]
    fn parses_times() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert!(parse_time("9h30").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
