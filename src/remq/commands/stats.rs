use super::lists::list_infos;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{RawReminder, Stats};
use crate::normalize::Normalizer;
use crate::store::ReminderStore;
use chrono::{DateTime, Utc};

/// Incomplete and due strictly before `now`.
pub fn is_overdue(raw: &RawReminder, normalizer: &Normalizer, now: DateTime<Utc>) -> bool {
    !raw.completed && normalizer.due_instant(raw).is_some_and(|due| due < now)
}

fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = completed as f64 / total as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}

pub fn run<S: ReminderStore>(
    store: &S,
    normalizer: &Normalizer,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let calendars = store.calendars()?;
    let reminders = store.reminders(None)?;

    let total = reminders.len();
    let completed = reminders.iter().filter(|r| r.completed).count();
    let overdue = reminders
        .iter()
        .filter(|r| is_overdue(r, normalizer, now))
        .count();

    let stats = Stats {
        total,
        completed,
        incomplete: total - completed,
        flagged: 0,
        overdue,
        completion_rate: completion_rate(completed, total),
        lists: list_infos(&calendars, &reminders),
    };
    Ok(CmdResult::default().with_stats(stats))
}
