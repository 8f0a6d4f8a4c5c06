use crate::error::{RemError, Result};
use crate::model::Calendar;
use crate::store::ReminderStore;

/// Resolves an optional list name to the calendars a fetch should cover.
///
/// `None` selects every list. A name matches calendars whose title is equal
/// ignoring case; several lists may share a name and are all selected. A
/// name matching nothing is [`RemError::ListNotFound`].
pub fn select_calendars<S: ReminderStore>(
    store: &S,
    list_name: Option<&str>,
) -> Result<Option<Vec<Calendar>>> {
    let Some(name) = list_name else {
        return Ok(None);
    };

    let wanted = name.to_lowercase();
    let matched: Vec<Calendar> = store
        .calendars()?
        .into_iter()
        .filter(|c| c.title.to_lowercase() == wanted)
        .collect();

    if matched.is_empty() {
        return Err(RemError::ListNotFound(name.to_string()));
    }
    Ok(Some(matched))
}
