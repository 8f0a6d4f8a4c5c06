//! Time handling shared by the normalizer and the filter engine.
//!
//! The store describes due dates as calendar components, so every
//! comparison first resolves them to an instant inside a [`TimeContext`].
//! User supplied window bounds go through [`parse_bound`], which accepts
//! strict ISO-8601 instants, common calendar layouts and natural phrases
//! such as `tomorrow at 3pm` or `in 2 weeks`.

use crate::error::{RemError, Result};
use crate::model::DateComponents;
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat,
    TimeZone, Utc,
};
use std::fmt;
use std::str::FromStr;

mod parse;

pub use parse::parse_bound;

/// The zone used to turn local dates and times into instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeContext {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl TimeContext {
    pub fn utc() -> Self {
        TimeContext::Fixed(Utc.fix())
    }

    /// Resolves a wall-clock date-time. Times skipped by a zone transition
    /// have no instant and yield `None`; repeated times take the earlier one.
    pub fn resolve(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeContext::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeContext::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Wall-clock reading of `now` in this context.
    pub fn naive_local(&self, now: DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeContext::Local => now.with_timezone(&Local).naive_local(),
            TimeContext::Fixed(offset) => now.with_timezone(offset).naive_local(),
        }
    }

    /// The calendar date `now` falls on in this context.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.naive_local(now).date()
    }

    /// Wall-clock `at` rendered without an offset, e.g. `2025-02-13T09:00:00`.
    pub fn format_local(&self, at: &DateTime<Utc>) -> String {
        self.naive_local(*at).format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Converts due-date components to an instant.
    ///
    /// Year, month and day are required; a missing time of day is midnight.
    pub fn components_to_instant(&self, comps: &DateComponents) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(comps.year?, comps.month?, comps.day?)?;
        let time = NaiveTime::from_hms_opt(
            comps.hour.unwrap_or(0),
            comps.minute.unwrap_or(0),
            comps.second.unwrap_or(0),
        )?;
        let naive = date.and_time(time);

        match comps.utc_offset_seconds {
            Some(seconds) => TimeContext::Fixed(FixedOffset::east_opt(seconds)?).resolve(naive),
            None => self.resolve(naive),
        }
    }
}

impl FromStr for TimeContext {
    type Err = RemError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(TimeContext::Local),
            "utc" | "z" => return Ok(TimeContext::utc()),
            _ => {}
        }

        let invalid = || RemError::Usage(format!("invalid timezone: {}", s));
        let (sign, rest) = match trimmed.chars().next() {
            Some('+') => (1, &trimmed[1..]),
            Some('-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(TimeContext::Fixed)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for TimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeContext::Local => write!(f, "local"),
            TimeContext::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Renders an instant the way every date field of the output is rendered.
pub fn format_instant(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Inclusive due-date window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueWindow {
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
}

impl DueWindow {
    pub fn new(before: Option<DateTime<Utc>>, after: Option<DateTime<Utc>>) -> Self {
        Self { before, after }
    }

    pub fn is_set(&self) -> bool {
        self.before.is_some() || self.after.is_some()
    }

    /// Whether a reminder with the given due instant falls inside the window.
    /// Without any bound everything passes; with one, undated reminders fail.
    pub fn admits(&self, due: Option<DateTime<Utc>>) -> bool {
        if !self.is_set() {
            return true;
        }
        let Some(due) = due else {
            return false;
        };
        if matches!(self.before, Some(before) if due > before) {
            return false;
        }
        if matches!(self.after, Some(after) if due < after) {
            return false;
        }
        true
    }
}
