//! Remote calendar/task operations via providers.

pub mod protocol;
pub mod provider;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::error::LunacalResult;
use crate::remote::protocol::{
    CreateEvent, CreateTask, DeleteEvent, DeleteTask, EventPayload, ListActivities, SetTaskStatus,
    TaskPayload, UpdateEvent, UpdateTask,
};
use crate::remote::provider::Provider;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemoteConfig(pub HashMap<String, toml::Value>);

impl From<&RemoteConfig> for serde_json::Map<String, serde_json::Value> {
    fn from(config: &RemoteConfig) -> Self {
        config
            .0
            .iter()
            .filter_map(|(k, v)| serde_json::to_value(v).ok().map(|v| (k.clone(), v)))
            .collect()
    }
}

/// Remote provider configuration (e.g., Google Calendar + Tasks settings)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Remote {
    pub provider: Provider,
    #[serde(flatten)]
    pub config: RemoteConfig,
}

impl Remote {
    pub fn new(provider: Provider, config: RemoteConfig) -> Self {
        Remote { provider, config }
    }

    fn remote_config(&self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::Map::from(&self.config)
    }

    /// Events and tasks between `from` and `to`.
    pub async fn activities(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> LunacalResult<Vec<Activity>> {
        self.provider
            .call(ListActivities {
                remote_config: self.remote_config(),
                from: from.to_rfc3339(),
                to: to.to_rfc3339(),
            })
            .await
    }

    pub async fn create_event(&self, event: &EventPayload) -> LunacalResult<Activity> {
        self.provider
            .call(CreateEvent {
                remote_config: self.remote_config(),
                event: event.clone(),
            })
            .await
    }

    pub async fn update_event(&self, event: &EventPayload) -> LunacalResult<Activity> {
        self.provider
            .call(UpdateEvent {
                remote_config: self.remote_config(),
                event: event.clone(),
            })
            .await
    }

    pub async fn delete_event(
        &self,
        event_id: &str,
        calendar_id: Option<&str>,
    ) -> LunacalResult<()> {
        self.provider
            .call(DeleteEvent {
                remote_config: self.remote_config(),
                event_id: event_id.to_string(),
                calendar_id: calendar_id.map(String::from),
            })
            .await
    }

    pub async fn create_task(&self, task: &TaskPayload) -> LunacalResult<Activity> {
        self.provider
            .call(CreateTask {
                remote_config: self.remote_config(),
                task: task.clone(),
            })
            .await
    }

    pub async fn update_task(&self, task: &TaskPayload) -> LunacalResult<Activity> {
        self.provider
            .call(UpdateTask {
                remote_config: self.remote_config(),
                task: task.clone(),
            })
            .await
    }

    pub async fn set_task_status(
        &self,
        task_id: &str,
        list_id: Option<&str>,
        completed: bool,
    ) -> LunacalResult<()> {
        self.provider
            .call(SetTaskStatus {
                remote_config: self.remote_config(),
                task_id: task_id.to_string(),
                list_id: list_id.map(String::from),
                completed,
            })
            .await
    }

    pub async fn delete_task(&self, task_id: &str, list_id: Option<&str>) -> LunacalResult<()> {
        self.provider
            .call(DeleteTask {
                remote_config: self.remote_config(),
                task_id: task_id.to_string(),
                list_id: list_id.map(String::from),
            })
            .await
    }
}
