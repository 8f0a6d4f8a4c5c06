//! # Storage Layer
//!
//! The reminder store is an external collaborator. This module defines the
//! [`ReminderStore`] trait that stands in for it, so the rest of the crate
//! never knows where lists and reminders actually come from.
//!
//! ## Completion-style fetches
//!
//! Platform stores deliver reminders through a completion callback rather
//! than a return value. The trait mirrors that with
//! [`ReminderStore::fetch_reminders`], and offers the blocking
//! [`ReminderStore::reminders`] on top of it: one fetch, one wait on a
//! one-shot channel, no timeout. Callers above this layer only ever see the
//! blocking form.
//!
//! ## Implementations
//!
//! - [`snapshot::SnapshotStore`]: reads a JSON snapshot of the store from
//!   disk and delivers fetches from a worker thread.
//! - [`memory::InMemoryStore`]: in-memory store for testing. Completes
//!   fetches inline and counts them.
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "calendars": [{"id": "work-id", "title": "Work"}],
//!   "reminders": [{"calendarItemIdentifier": "...", "calendar": {...}, ...}]
//! }
//! ```

use crate::error::{RemError, Result};
use crate::model::{Calendar, RawReminder};
use std::sync::mpsc;

pub mod memory;
pub mod snapshot;

/// Invoked exactly once with the fetched reminders. `None` means the store
/// delivered nothing at all.
pub type FetchCompletion = Box<dyn FnOnce(Option<Vec<RawReminder>>) + Send + 'static>;

/// Abstract interface to the reminder store.
pub trait ReminderStore {
    /// All reminder lists, in the store's enumeration order.
    fn calendars(&self) -> Result<Vec<Calendar>>;

    /// Starts a fetch of every reminder in `calendars` (all lists when
    /// `None`) and reports the result through `on_complete`.
    fn fetch_reminders(
        &self,
        calendars: Option<&[Calendar]>,
        on_complete: FetchCompletion,
    ) -> Result<()>;

    /// Fetches reminders and waits for the store to deliver them.
    fn reminders(&self, calendars: Option<&[Calendar]>) -> Result<Vec<RawReminder>> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.fetch_reminders(
            calendars,
            Box::new(move |delivered| {
                // The receiver only disappears if the caller is gone.
                let _ = tx.send(delivered);
            }),
        )?;

        let delivered = rx.recv().map_err(|_| {
            RemError::StoreUnavailable("fetch ended without delivering reminders".to_string())
        })?;
        Ok(delivered.unwrap_or_default())
    }
}

/// Keeps only reminders whose list is one of `calendars`.
pub(crate) fn in_calendars(reminders: &[RawReminder], calendars: Option<&[Calendar]>) -> Vec<RawReminder> {
    match calendars {
        None => reminders.to_vec(),
        Some(selected) => reminders
            .iter()
            .filter(|r| selected.iter().any(|c| c.id == r.calendar.id))
            .cloned()
            .collect(),
    }
}
