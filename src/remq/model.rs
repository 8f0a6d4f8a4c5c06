use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// URI scheme wrapped around raw store identifiers to form a [`ReminderInfo::id`].
pub const REMINDER_SCHEME: &str = "x-apple-reminder";

/// A reminder list as the store enumerates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub title: String,
}

impl Calendar {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Calendar-agnostic due date description. Needs a time context before it
/// can be compared against an instant, see [`crate::dates::TimeContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateComponents {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    /// Pins the components to a fixed zone instead of the active context.
    pub utc_offset_seconds: Option<i32>,
}

impl DateComponents {
    /// An all-day style date (no time of day).
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self
    }

    pub fn with_offset(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = Some(seconds);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alarm {
    /// Relative alarms carry no absolute trigger.
    pub absolute_date: Option<DateTime<Utc>>,
}

/// A reminder exactly as the store delivers it, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReminder {
    pub calendar_item_identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub calendar: Calendar,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub due_date_components: Option<DateComponents>,
    #[serde(default)]
    pub alarms: Vec<Alarm>,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawReminder {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>, calendar: &Calendar) -> Self {
        Self {
            calendar_item_identifier: identifier.into(),
            title: Some(title.into()),
            notes: None,
            calendar: calendar.clone(),
            completed: false,
            priority: 0,
            due_date_components: None,
            alarms: Vec::new(),
            completion_date: None,
            creation_date: None,
            last_modified_date: None,
            url: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_due(mut self, components: DateComponents) -> Self {
        self.due_date_components = Some(components);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_alarm(mut self, absolute_date: Option<DateTime<Utc>>) -> Self {
        self.alarms.push(Alarm { absolute_date });
        self
    }

    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed = true;
        self.completion_date = Some(at);
        self
    }
}

/// One reminder list with the number of reminders it currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// The canonical, JSON-facing shape of a reminder.
///
/// Date fields are ISO-8601 strings in UTC with millisecond precision.
/// Absent values are omitted from the JSON object entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderInfo {
    pub id: String,
    pub name: String,
    pub list_name: String,
    pub completed: bool,
    /// The store exposes no flagged bit; always `false` here.
    pub flagged: bool,
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remind_me_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Aggregate counts over every reminder in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    pub flagged: usize,
    pub overdue: usize,
    pub completion_rate: f64,
    pub lists: Vec<ListInfo>,
}
