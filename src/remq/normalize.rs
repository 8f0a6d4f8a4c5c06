//! Record Normalizer: maps a [`RawReminder`] onto the [`ReminderInfo`] shape.
//!
//! Normalization never fails. Optional store fields that are unset, or due
//! components that cannot be resolved in the active [`TimeContext`], simply
//! become absent fields.

use crate::dates::{format_instant, TimeContext};
use crate::model::{RawReminder, ReminderInfo, REMINDER_SCHEME};
use chrono::{DateTime, Utc};

/// Fully qualified identifier for a raw store identifier.
pub fn reminder_id(raw_identifier: &str) -> String {
    format!("{}://{}", REMINDER_SCHEME, raw_identifier)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    time: TimeContext,
}

impl Normalizer {
    pub fn new(time: TimeContext) -> Self {
        Self { time }
    }

    pub fn time(&self) -> &TimeContext {
        &self.time
    }

    /// The reminder's due instant, if its components resolve to one.
    pub fn due_instant(&self, raw: &RawReminder) -> Option<DateTime<Utc>> {
        raw.due_date_components
            .as_ref()
            .and_then(|comps| self.time.components_to_instant(comps))
    }

    /// Only the first alarm is consulted; a relative first alarm means no date.
    pub fn remind_me_instant(&self, raw: &RawReminder) -> Option<DateTime<Utc>> {
        raw.alarms.first().and_then(|alarm| alarm.absolute_date)
    }

    pub fn normalize(&self, raw: &RawReminder) -> ReminderInfo {
        ReminderInfo {
            id: reminder_id(&raw.calendar_item_identifier),
            name: raw.title.clone().unwrap_or_default(),
            list_name: raw.calendar.title.clone(),
            completed: raw.completed,
            flagged: false,
            priority: raw.priority,
            due_date: self.due_instant(raw).as_ref().map(format_instant),
            remind_me_date: self.remind_me_instant(raw).as_ref().map(format_instant),
            completion_date: raw.completion_date.as_ref().map(format_instant),
            creation_date: raw.creation_date.as_ref().map(format_instant),
            mod_date: raw.last_modified_date.as_ref().map(format_instant),
            body: raw.notes.clone(),
        }
    }
}
