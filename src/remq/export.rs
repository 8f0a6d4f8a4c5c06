//! Export rendering.
//!
//! An export is a flat, snake_case record per reminder, written as a
//! pretty-printed JSON array or as CSV with a fixed header. Dates are
//! wall-clock readings in the active time context, without an offset.
//! Rendering targets any [`Write`]; choosing the sink is up to the caller.

use crate::error::{RemError, Result};
use crate::normalize::{reminder_id, Normalizer};
use crate::model::RawReminder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub const CSV_HEADERS: [&str; 11] = [
    "id",
    "name",
    "body",
    "list_name",
    "due_date",
    "remind_me_date",
    "priority",
    "priority_label",
    "flagged",
    "completed",
    "url",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = RemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(RemError::Usage(format!("unknown export format: {}", s))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub list_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_me_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<String>,
    pub priority: i64,
    pub priority_label: &'static str,
    pub flagged: bool,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ExportRecord {
    pub fn from_raw(raw: &RawReminder, normalizer: &Normalizer) -> Self {
        let local = |at: Option<DateTime<Utc>>| at.map(|dt| normalizer.time().format_local(&dt));
        let body = raw.notes.clone().filter(|n| !n.is_empty());
        let url = raw
            .url
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| body.as_deref().and_then(url_in_notes));

        Self {
            id: reminder_id(&raw.calendar_item_identifier),
            name: raw.title.clone().unwrap_or_default(),
            body,
            list_name: raw.calendar.title.clone(),
            due_date: local(normalizer.due_instant(raw)),
            remind_me_date: local(normalizer.remind_me_instant(raw)),
            completion_date: local(raw.completion_date),
            creation_date: local(raw.creation_date),
            modification_date: local(raw.last_modified_date),
            priority: raw.priority,
            priority_label: priority_label(raw.priority),
            flagged: false,
            completed: raw.completed,
            url,
        }
    }

    fn csv_row(&self) -> [String; 11] {
        [
            self.id.clone(),
            self.name.clone(),
            self.body.clone().unwrap_or_default(),
            self.list_name.clone(),
            self.due_date.clone().unwrap_or_default(),
            self.remind_me_date.clone().unwrap_or_default(),
            self.priority.to_string(),
            self.priority_label.to_string(),
            self.flagged.to_string(),
            self.completed.to_string(),
            self.url.clone().unwrap_or_default(),
        ]
    }
}

/// Store priorities run 1 (high) to 9 (low), 0 meaning none.
pub fn priority_label(priority: i64) -> &'static str {
    match priority {
        1..=4 => "high",
        5 => "medium",
        6..=9 => "low",
        _ => "none",
    }
}

/// First `URL: ...` line or bare http(s) line of a note.
pub fn url_in_notes(notes: &str) -> Option<String> {
    notes.lines().map(str::trim).find_map(|line| {
        if let Some(url) = line.strip_prefix("URL: ") {
            return Some(url.to_string());
        }
        (line.starts_with("http://") || line.starts_with("https://")).then(|| line.to_string())
    })
}

pub fn write_json<W: Write>(mut out: W, records: &[ExportRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, records: &[ExportRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(record.csv_row())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write<W: Write>(out: W, records: &[ExportRecord], format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => write_json(out, records),
        ExportFormat::Csv => write_csv(out, records),
    }
}
