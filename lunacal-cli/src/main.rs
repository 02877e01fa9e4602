mod commands;
mod render;
mod svg;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lunacal_core::app_config::AppConfig;

#[derive(Parser)]
#[command(name = "lunacal")]
#[command(about = "Track your cycle alongside your calendar events and tasks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single day: cycle day, phase, moon and activities
    Day {
        /// Date to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// Show a month grid with phase colors and activity counts
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// Render the cycle wheel to an SVG file
    Wheel {
        /// Inspect this cycle day instead of today's
        #[arg(short, long)]
        day: Option<u32>,

        /// Anchor the wheel at this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Where to write the SVG
        #[arg(short, long, default_value = "wheel.svg")]
        out: PathBuf,
    },
    /// Show or change the cycle configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage recorded cycle start dates
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Fetch events and tasks from the configured provider
    Sync,
    /// Create, edit or delete calendar events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },
    /// Create, edit, complete or delete tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show paths and current cycle settings
    Show,
    /// Change the cycle start date and/or length
    Set {
        /// First day of the current cycle (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Cycle length in days (21-35)
        #[arg(long)]
        length: Option<u32>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recorded cycles with their derived lengths
    List,
    /// Record a past cycle start date
    Add {
        /// Start date (YYYY-MM-DD)
        date: String,
    },
    /// Remove a recorded start date
    Remove {
        /// Start date (YYYY-MM-DD)
        date: String,
    },
    /// Forget all recorded cycles
    Clear,
}

#[derive(Subcommand)]
enum EventAction {
    /// Create a calendar event
    New {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// Target calendar id (provider default if omitted)
        #[arg(short, long)]
        calendar: Option<String>,
    },
    /// Update a synced event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long)]
        end: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
}

#[derive(Subcommand)]
enum TaskAction {
    /// Create a task
    New {
        title: String,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,

        /// Task list id (provider default if omitted)
        #[arg(short, long)]
        list: Option<String>,
    },
    /// Update a task's title or due date
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Mark a task completed
    Done { id: String },
    /// Reopen a completed task
    Undo { id: String },
    /// Delete a task
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None => default_command()?,
    };

    match command {
        Commands::Day { date } => commands::day::run(date),
        Commands::Month { month } => commands::month::run(month),
        Commands::Wheel { day, date, out } => commands::wheel::run(day, date, out),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_show(),
            ConfigAction::Set { start, length } => commands::config::run_set(start, length),
        },
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::run_list(),
            HistoryAction::Add { date } => commands::history::run_add(date),
            HistoryAction::Remove { date } => commands::history::run_remove(date),
            HistoryAction::Clear => commands::history::run_clear(),
        },
        Commands::Sync => commands::sync::run().await,
        Commands::Event { action } => match action {
            EventAction::New {
                title,
                date,
                start,
                end,
                calendar,
            } => commands::event::run_new(title, date, start, end, calendar).await,
            EventAction::Edit {
                id,
                title,
                date,
                start,
                end,
            } => commands::event::run_edit(id, title, date, start, end).await,
            EventAction::Delete { id } => commands::event::run_delete(id).await,
        },
        Commands::Task { action } => match action {
            TaskAction::New { title, due, list } => commands::task::run_new(title, due, list).await,
            TaskAction::Edit { id, title, due } => commands::task::run_edit(id, title, due).await,
            TaskAction::Done { id } => commands::task::run_done(id).await,
            TaskAction::Undo { id } => commands::task::run_undo(id).await,
            TaskAction::Delete { id } => commands::task::run_delete(id).await,
        },
    }
}

/// A bare `lunacal` opens whichever view the config asks for.
fn default_command() -> Result<Commands> {
    let config = AppConfig::load()?;
    match config.default_view.as_str() {
        "cycle" => Ok(Commands::Day { date: None }),
        "month" => Ok(Commands::Month { month: None }),
        other => anyhow::bail!(
            "Unknown default_view '{}' in config.toml (expected \"cycle\" or \"month\")",
            other
        ),
    }
}
