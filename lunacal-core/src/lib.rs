//! Core types and the cycle engine for the lunacal ecosystem.
//!
//! This crate provides everything shared between lunacal-cli and
//! calendar/task providers:
//! - `cycle` types for cycle-day arithmetic, phases and history
//! - `wheel` for the radial day layout and selection state
//! - `moon` for lunar phase lookup
//! - `Activity` records, the local `store` and global configuration
//! - `remote` module for the CLI-provider communication protocol

pub mod activity;
pub mod app_config;
pub mod cycle;
pub mod error;
pub mod moon;
pub mod remote;
pub mod store;
pub mod wheel;

pub use activity::{Activity, ActivityKind};
pub use cycle::CycleConfig;
pub use error::{LunacalError, LunacalResult};
