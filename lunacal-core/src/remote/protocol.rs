//! Defines the JSON protocol used for communication between lunacal-cli
//! and provider binaries over stdin/stdout.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::activity::Activity;

pub trait ProviderCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ListActivities,
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
    CreateTask,
    UpdateTask,
    SetTaskStatus,
    DeleteTask,
}

/// Request sent from CLI to provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from provider to CLI.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Fields for creating or updating a calendar event.
///
/// `id` is absent on create; the provider assigns it and returns the
/// stored activity. Missing times mean an all-day event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    /// IANA timezone the times are expressed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Fields for creating or updating a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// `YYYY-MM-DD`; tasks may have no due date at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

/// List events and tasks within a time range.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListActivities {
    /// Provider-specific config (e.g., google_account, google_calendar_id)
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub from: String,
    pub to: String,
}

impl ProviderCommand for ListActivities {
    type Response = Vec<Activity>;
    fn command() -> Command {
        Command::ListActivities
    }
}

/// Create a new calendar event.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEvent {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub event: EventPayload,
}

impl ProviderCommand for CreateEvent {
    type Response = Activity;
    fn command() -> Command {
        Command::CreateEvent
    }
}

/// Update an existing calendar event.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateEvent {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub event: EventPayload,
}

impl ProviderCommand for UpdateEvent {
    type Response = Activity;
    fn command() -> Command {
        Command::UpdateEvent
    }
}

/// Delete an event by ID.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteEvent {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
}

impl ProviderCommand for DeleteEvent {
    type Response = ();
    fn command() -> Command {
        Command::DeleteEvent
    }
}

/// Create a new task.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub task: TaskPayload,
}

impl ProviderCommand for CreateTask {
    type Response = Activity;
    fn command() -> Command {
        Command::CreateTask
    }
}

/// Update an existing task's title or due date.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub task: TaskPayload,
}

impl ProviderCommand for UpdateTask {
    type Response = Activity;
    fn command() -> Command {
        Command::UpdateTask
    }
}

/// Mark a task completed or reopen it.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetTaskStatus {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    pub completed: bool,
}

impl ProviderCommand for SetTaskStatus {
    type Response = ();
    fn command() -> Command {
        Command::SetTaskStatus
    }
}

/// Delete a task by ID.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTask {
    #[serde(flatten)]
    pub remote_config: serde_json::Map<String, serde_json::Value>,
    pub task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

impl ProviderCommand for DeleteTask {
    type Response = ();
    fn command() -> Command {
        Command::DeleteTask
    }
}
