use super::{in_calendars, FetchCompletion, ReminderStore};
use crate::error::Result;
use crate::model::{Calendar, RawReminder};
use std::cell::Cell;

/// In-memory store. Fetches complete before `fetch_reminders` returns.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    calendars: Vec<Calendar>,
    reminders: Vec<RawReminder>,
    fetches: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_calendar(&mut self, calendar: Calendar) {
        self.calendars.push(calendar);
    }

    pub fn add_reminder(&mut self, reminder: RawReminder) {
        self.reminders.push(reminder);
    }

    /// Number of reminder fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl ReminderStore for InMemoryStore {
    fn calendars(&self) -> Result<Vec<Calendar>> {
        Ok(self.calendars.clone())
    }

    fn fetch_reminders(
        &self,
        calendars: Option<&[Calendar]>,
        on_complete: FetchCompletion,
    ) -> Result<()> {
        self.fetches.set(self.fetches.get() + 1);
        on_complete(Some(in_calendars(&self.reminders, calendars)));
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::DateComponents;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_list(mut self, id: &str, title: &str) -> Self {
            self.store.add_calendar(Calendar::new(id, title));
            self
        }

        pub fn with_reminder(mut self, reminder: RawReminder) -> Self {
            self.store.add_reminder(reminder);
            self
        }

        /// The calendar registered under `id`.
        pub fn list(&self, id: &str) -> Calendar {
            self.store
                .calendars
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .unwrap_or_else(|| panic!("fixture has no list {}", id))
        }

        /// Work and Home lists: Work holds one completed reminder and one
        /// due 2025-02-13, Home holds one undated reminder.
        pub fn work_and_home() -> Self {
            let fixture = Self::new()
                .with_list("work-id", "Work")
                .with_list("home-id", "Home");
            let work = fixture.list("work-id");
            let home = fixture.list("home-id");

            let done_at = chrono::DateTime::parse_from_rfc3339("2025-02-01T12:00:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc);

            fixture
                .with_reminder(
                    RawReminder::new("11111111-AAAA", "File expenses", &work).completed_at(done_at),
                )
                .with_reminder(
                    RawReminder::new("6ECEA745-BBBB", "Quarterly review", &work)
                        .with_notes("Prepare the slides")
                        .with_due(DateComponents::date(2025, 2, 13).with_offset(0)),
                )
                .with_reminder(RawReminder::new("22222222-CCCC", "Buy milk", &home))
        }
    }
}
