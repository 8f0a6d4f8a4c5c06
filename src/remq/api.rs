//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every query, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the injected store and the normalizer's time context
//! - **Normalizes inputs** (date-bound strings into instants)
//! - **Dispatches** to the matching command
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and never decides exit codes.
//!
//! ## Generic Over ReminderStore
//!
//! `RemApi<S: ReminderStore>` is generic over the store:
//! - Production: `RemApi<SnapshotStore>`
//! - Testing: `RemApi<InMemoryStore>`

use crate::commands;
use crate::dates::{parse_bound, DueWindow, TimeContext};
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::store::ReminderStore;
use chrono::{DateTime, Utc};

/// Raw `reminders` arguments, as a user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderQuery {
    pub list: Option<String>,
    pub completed: Option<bool>,
    pub search: Option<String>,
    pub due_before: Option<String>,
    pub due_after: Option<String>,
}

pub struct RemApi<S: ReminderStore> {
    store: S,
    normalizer: Normalizer,
}

impl<S: ReminderStore> RemApi<S> {
    pub fn new(store: S, time: TimeContext) -> Self {
        Self {
            store,
            normalizer: Normalizer::new(time),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn lists(&self) -> Result<commands::CmdResult> {
        commands::lists::run(&self.store)
    }

    /// Date bounds are parsed before anything is fetched, so a bad bound
    /// never costs a store round trip.
    pub fn reminders(&self, query: &ReminderQuery, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        let time = self.normalizer.time();
        let before = query
            .due_before
            .as_deref()
            .map(|s| parse_bound(s, time, now))
            .transpose()?;
        let after = query
            .due_after
            .as_deref()
            .map(|s| parse_bound(s, time, now))
            .transpose()?;

        let filter = ReminderFilter {
            list_name: query.list.clone(),
            completed: query.completed,
            search: query.search.clone(),
            due: DueWindow::new(before, after),
        };
        commands::reminders::run(&self.store, &filter, &self.normalizer)
    }

    pub fn get(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id, &self.normalizer)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, &self.normalizer, now)
    }

    pub fn overdue(&self, list: Option<&str>, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        commands::agenda::overdue(&self.store, list, &self.normalizer, now)
    }

    pub fn export(&self, list: Option<&str>, incomplete: bool) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, list, incomplete, &self.normalizer)
    }

    pub fn upcoming(
        &self,
        list: Option<&str>,
        days: u32,
        now: DateTime<Utc>,
    ) -> Result<commands::CmdResult> {
        commands::agenda::upcoming(&self.store, list, days, &self.normalizer, now)
    }
}

pub use crate::commands::agenda::DEFAULT_UPCOMING_DAYS;
pub use crate::commands::reminders::ReminderFilter;
pub use crate::commands::CmdResult;
