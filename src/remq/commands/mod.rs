//! # Command Layer
//!
//! One module per verb. Commands take a store and plain Rust arguments,
//! return a [`CmdResult`], and never touch stdout, stderr or the process
//! exit status.

use crate::export::ExportRecord;
use crate::model::{ListInfo, ReminderInfo, Stats};

pub mod agenda;
pub mod export;
pub mod get;
pub mod helpers;
pub mod lists;
pub mod reminders;
pub mod stats;

#[derive(Debug, Default)]
pub struct CmdResult {
    pub lists: Vec<ListInfo>,
    pub reminders: Vec<ReminderInfo>,
    pub reminder: Option<ReminderInfo>,
    pub stats: Option<Stats>,
    pub exported: Vec<ExportRecord>,
}

impl CmdResult {
    pub fn with_lists(mut self, lists: Vec<ListInfo>) -> Self {
        self.lists = lists;
        self
    }

    pub fn with_reminders(mut self, reminders: Vec<ReminderInfo>) -> Self {
        self.reminders = reminders;
        self
    }

    pub fn with_reminder(mut self, reminder: ReminderInfo) -> Self {
        self.reminder = Some(reminder);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_exported(mut self, exported: Vec<ExportRecord>) -> Self {
        self.exported = exported;
        self
    }
}
