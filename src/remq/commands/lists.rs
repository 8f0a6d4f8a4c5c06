use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Calendar, ListInfo, RawReminder};
use crate::store::ReminderStore;
use std::collections::HashMap;

/// Number of reminders per list id.
pub fn count_by_list(reminders: &[RawReminder]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for r in reminders {
        *counts.entry(r.calendar.id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Joins counts onto every known list, keeping the calendars' order.
/// Lists without reminders get a zero count.
pub fn list_infos(calendars: &[Calendar], reminders: &[RawReminder]) -> Vec<ListInfo> {
    let counts = count_by_list(reminders);
    calendars
        .iter()
        .map(|c| ListInfo {
            id: c.id.clone(),
            name: c.title.clone(),
            count: counts.get(&c.id).copied().unwrap_or(0),
        })
        .collect()
}

pub fn run<S: ReminderStore>(store: &S) -> Result<CmdResult> {
    let calendars = store.calendars()?;
    let reminders = store.reminders(None)?;
    log::debug!(
        "counting {} reminders across {} lists",
        reminders.len(),
        calendars.len()
    );

    Ok(CmdResult::default().with_lists(list_infos(&calendars, &reminders)))
}
