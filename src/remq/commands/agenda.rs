use super::helpers::select_calendars;
use super::reminders::{apply, ReminderFilter};
use super::stats::is_overdue;
use crate::commands::CmdResult;
use crate::dates::DueWindow;
use crate::error::{RemError, Result};
use crate::normalize::Normalizer;
use crate::store::ReminderStore;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Incomplete reminders due strictly before `now`.
pub fn overdue<S: ReminderStore>(
    store: &S,
    list_name: Option<&str>,
    normalizer: &Normalizer,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let calendars = select_calendars(store, list_name)?;
    let records = store.reminders(calendars.as_deref())?;
    let late: Vec<_> = records
        .iter()
        .filter(|r| is_overdue(r, normalizer, now))
        .map(|r| normalizer.normalize(r))
        .collect();

    Ok(CmdResult::default().with_reminders(late))
}

/// End of a `days`-long horizon starting at `now`, if it is representable.
fn horizon(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_add_signed(span))
        .ok_or_else(|| RemError::Usage(format!("days out of range: {}", days)))
}

/// Incomplete reminders due within `days` days from `now`, bounds included.
pub fn upcoming<S: ReminderStore>(
    store: &S,
    list_name: Option<&str>,
    days: u32,
    normalizer: &Normalizer,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let filter = ReminderFilter {
        due: DueWindow::new(Some(horizon(now, days)?), Some(now)),
        ..ReminderFilter::incomplete()
    }
    .in_list(list_name.map(str::to_string));

    let calendars = select_calendars(store, filter.list_name.as_deref())?;
    let records = store.reminders(calendars.as_deref())?;
    Ok(CmdResult::default().with_reminders(apply(&records, &filter, normalizer)))
}
