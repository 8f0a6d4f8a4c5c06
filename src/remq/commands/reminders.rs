//! Filter Engine.
//!
//! Narrows fetched reminders by a conjunction of optional predicates, in this
//! order: completion, text search, due window. The first failing predicate
//! drops the record. Survivors are normalized and keep the store's
//! enumeration order.
//!
//! List selection happens before the fetch, not here: the list name is
//! resolved to calendars and only those are fetched.

use super::helpers::select_calendars;
use crate::commands::CmdResult;
use crate::dates::DueWindow;
use crate::error::Result;
use crate::model::{RawReminder, ReminderInfo};
use crate::normalize::Normalizer;
use crate::store::ReminderStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    pub list_name: Option<String>,
    pub completed: Option<bool>,
    pub search: Option<String>,
    pub due: DueWindow,
}

impl ReminderFilter {
    pub fn incomplete() -> Self {
        Self {
            completed: Some(false),
            ..Self::default()
        }
    }

    pub fn in_list(mut self, list_name: Option<String>) -> Self {
        self.list_name = list_name;
        self
    }
}

fn matches_search(raw: &RawReminder, query_lower: &str) -> bool {
    let title = raw.title.as_deref().unwrap_or_default().to_lowercase();
    let notes = raw.notes.as_deref().unwrap_or_default().to_lowercase();
    title.contains(query_lower) || notes.contains(query_lower)
}

/// Records passing every predicate of `filter` except the list selection,
/// in their original order.
pub fn select<'a>(
    records: &'a [RawReminder],
    filter: &ReminderFilter,
    normalizer: &Normalizer,
) -> Vec<&'a RawReminder> {
    let query = filter.search.as_ref().map(|q| q.to_lowercase());

    records
        .iter()
        .filter(|r| filter.completed.map_or(true, |want| r.completed == want))
        .filter(|r| query.as_deref().map_or(true, |q| matches_search(r, q)))
        .filter(|r| !filter.due.is_set() || filter.due.admits(normalizer.due_instant(r)))
        .collect()
}

/// [`select`], normalized.
pub fn apply(
    records: &[RawReminder],
    filter: &ReminderFilter,
    normalizer: &Normalizer,
) -> Vec<ReminderInfo> {
    select(records, filter, normalizer)
        .into_iter()
        .map(|r| normalizer.normalize(r))
        .collect()
}

pub fn run<S: ReminderStore>(
    store: &S,
    filter: &ReminderFilter,
    normalizer: &Normalizer,
) -> Result<CmdResult> {
    let calendars = select_calendars(store, filter.list_name.as_deref())?;
    let records = store.reminders(calendars.as_deref())?;
    let matched = apply(&records, filter, normalizer);
    log::debug!("{} of {} reminders matched", matched.len(), records.len());

    Ok(CmdResult::default().with_reminders(matched))
}
