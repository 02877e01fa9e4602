//! Synced calendar activities: events and tasks, provider-neutral.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Whether an activity is a calendar event or a task-list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Event,
    Task,
}

fn default_color() -> String {
    // Fallback when the provider reports no calendar color.
    "#3b82f6".to_string()
}

/// One thing happening on a day: a calendar event, or a task due then.
///
/// This is both the wire format providers return and the shape cached
/// in the activities snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default = "default_color")]
    pub color: String,
    pub kind: ActivityKind,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    /// Tasks without a due date carry a placeholder `date` and are kept
    /// out of the month and day views.
    #[serde(default)]
    pub no_due_date: bool,
}

impl Activity {
    pub fn is_task(&self) -> bool {
        matches!(self.kind, ActivityKind::Task)
    }

    /// Whether this activity appears on calendar views.
    pub fn on_calendar(&self) -> bool {
        !self.no_due_date
    }
}

/// Day-cell ordering: events sorted by start time, tasks after events.
pub fn sort_for_display(activities: &mut [Activity]) {
    activities.sort_by(|a, b| match (a.is_task(), b.is_task()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, false) => a.start_time.cmp(&b.start_time),
        (true, true) => Ordering::Equal,
    });
}

/// Group activities by day, each day sorted for display.
pub fn by_day(activities: &[Activity]) -> BTreeMap<NaiveDate, Vec<Activity>> {
    let mut days: BTreeMap<NaiveDate, Vec<Activity>> = BTreeMap::new();

    for activity in activities {
        days.entry(activity.date).or_default().push(activity.clone());
    }

    for list in days.values_mut() {
        sort_for_display(list);
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event(id: &str, day: NaiveDate, start: Option<NaiveTime>) -> Activity {
        Activity {
            id: id.to_string(),
            title: id.to_string(),
            date: day,
            start_time: start,
            end_time: None,
            color: default_color(),
            kind: ActivityKind::Event,
            completed: false,
            calendar_id: Some("primary".to_string()),
            list_id: None,
            no_due_date: false,
        }
    }

    fn task(id: &str, day: NaiveDate) -> Activity {
        Activity {
            id: id.to_string(),
            title: id.to_string(),
            date: day,
            start_time: None,
            end_time: None,
            color: default_color(),
            kind: ActivityKind::Task,
            completed: false,
            calendar_id: None,
            list_id: Some("@default".to_string()),
            no_due_date: false,
        }
    }

    // --- ordering ---

    #[test]
    fn events_sort_by_start_time_tasks_last() {
        let day = date(2025, 3, 10);
        let mut activities = vec![
            task("groceries", day),
            event("lunch", day, Some(time(12, 0))),
            event("standup", day, Some(time(9, 30))),
            event("all-day", day, None),
        ];

        sort_for_display(&mut activities);

        let ids: Vec<&str> = activities.iter().map(|a| a.id.as_str()).collect();
        // Untimed events first (no start time sorts lowest), then by
        // time, tasks at the end.
        assert_eq!(ids, vec!["all-day", "standup", "lunch", "groceries"]);
    }

    #[test]
    fn task_order_is_preserved() {
        let day = date(2025, 3, 10);
        let mut activities = vec![task("first", day), task("second", day), task("third", day)];

        sort_for_display(&mut activities);

        let ids: Vec<&str> = activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    // --- grouping ---

    #[test]
    fn by_day_buckets_and_sorts() {
        let monday = date(2025, 3, 10);
        let tuesday = date(2025, 3, 11);
        let activities = vec![
            event("b", tuesday, Some(time(15, 0))),
            task("todo", monday),
            event("a", monday, Some(time(9, 0))),
        ];

        let days = by_day(&activities);

        assert_eq!(days.len(), 2);
        let monday_ids: Vec<&str> = days[&monday].iter().map(|a| a.id.as_str()).collect();
        assert_eq!(monday_ids, vec!["a", "todo"]);
        assert_eq!(days[&tuesday].len(), 1);
    }

    // --- serde shape ---

    #[test]
    fn wire_shape_is_camel_case() {
        let activity = event("evt-1", date(2025, 3, 10), Some(time(9, 30)));

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["id"], "evt-1");
        assert_eq!(json["startTime"], "09:30:00");
        assert_eq!(json["kind"], "event");
        assert_eq!(json["calendarId"], "primary");
        assert!(json.get("listId").is_none());
        assert_eq!(json["noDueDate"], false);
    }

    #[test]
    fn minimal_wire_record_fills_defaults() {
        let json = r#"{
            "id": "task-1",
            "title": "Water the plants",
            "date": "2025-03-10",
            "kind": "task"
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert!(activity.is_task());
        assert!(!activity.completed);
        assert!(!activity.no_due_date);
        assert_eq!(activity.color, "#3b82f6");
        assert_eq!(activity.start_time, None);
    }

    #[test]
    fn no_due_date_tasks_stay_off_the_calendar() {
        let mut someday = task("someday", date(2025, 3, 10));
        someday.no_due_date = true;

        assert!(!someday.on_calendar());
        assert!(task("due", date(2025, 3, 10)).on_calendar());
    }
}
