use super::helpers::select_calendars;
use super::reminders::{select, ReminderFilter};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::export::ExportRecord;
use crate::normalize::Normalizer;
use crate::store::ReminderStore;

/// Export records for a list (or every list), optionally incomplete only.
pub fn run<S: ReminderStore>(
    store: &S,
    list_name: Option<&str>,
    incomplete: bool,
    normalizer: &Normalizer,
) -> Result<CmdResult> {
    let filter = ReminderFilter {
        completed: incomplete.then_some(false),
        ..ReminderFilter::default()
    }
    .in_list(list_name.map(str::to_string));

    let calendars = select_calendars(store, filter.list_name.as_deref())?;
    let records = store.reminders(calendars.as_deref())?;
    let exported: Vec<ExportRecord> = select(&records, &filter, normalizer)
        .into_iter()
        .map(|r| ExportRecord::from_raw(r, normalizer))
        .collect();
    log::debug!("exporting {} of {} reminders", exported.len(), records.len());

    Ok(CmdResult::default().with_exported(exported))
}
