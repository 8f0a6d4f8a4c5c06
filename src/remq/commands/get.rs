//! Identifier Resolver.
//!
//! Users paste full identifiers or type short prefixes of them. A target is
//! tried against every record with each rule in turn, and the first rule
//! that matches anything decides:
//!
//! 1. the fully qualified id (`x-apple-reminder://<raw>`), exactly
//! 2. the raw identifier, ignoring case
//! 3. a prefix of the raw identifier, ignoring case
//!
//! Within a rule the first record in store order wins. A prefix shared by
//! several records is not an error; the first one is returned and a warning
//! is logged.

use crate::commands::CmdResult;
use crate::error::{RemError, Result};
use crate::model::RawReminder;
use crate::normalize::{reminder_id, Normalizer};
use crate::store::ReminderStore;

pub fn resolve<'a>(records: &'a [RawReminder], target: &str) -> Option<&'a RawReminder> {
    if let Some(exact) = records
        .iter()
        .find(|r| reminder_id(&r.calendar_item_identifier) == target)
    {
        return Some(exact);
    }

    let upper = target.to_uppercase();
    if let Some(same) = records
        .iter()
        .find(|r| r.calendar_item_identifier.to_uppercase() == upper)
    {
        return Some(same);
    }

    let mut prefixed = records
        .iter()
        .filter(|r| r.calendar_item_identifier.to_uppercase().starts_with(&upper));
    let first = prefixed.next()?;
    let others = prefixed.count();
    if others > 0 {
        log::warn!(
            "identifier {} matches {} reminders, using {}",
            target,
            others + 1,
            first.calendar_item_identifier
        );
    }
    Some(first)
}

pub fn run<S: ReminderStore>(store: &S, target: &str, normalizer: &Normalizer) -> Result<CmdResult> {
    if target.trim().is_empty() {
        return Err(RemError::Usage("missing reminder id".to_string()));
    }

    let records = store.reminders(None)?;
    let found = resolve(&records, target)
        .ok_or_else(|| RemError::ReminderNotFound(target.to_string()))?;

    Ok(CmdResult::default().with_reminder(normalizer.normalize(found)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::TimeContext;
    use crate::model::Calendar;
    use crate::store::memory::fixtures::StoreFixture;

    fn records(ids: &[&str]) -> Vec<RawReminder> {
        let cal = Calendar::new("c", "C");
        ids.iter()
            .map(|id| RawReminder::new(*id, format!("title {}", id), &cal))
            .collect()
    }

    fn resolved_id(records: &[RawReminder], target: &str) -> Option<String> {
        resolve(records, target).map(|r| r.calendar_item_identifier.clone())
    }

    #[test]
    fn resolves_fully_qualified_id() {
        let all = records(&["6ECEA745-0001", "ABCDEF00-0002"]);
        assert_eq!(
            resolved_id(&all, "x-apple-reminder://ABCDEF00-0002").as_deref(),
            Some("ABCDEF00-0002")
        );
    }

    #[test]
    fn resolves_raw_id_ignoring_case() {
        let all = records(&["6ECEA745-0001", "ABCDEF00-0002"]);
        assert_eq!(
            resolved_id(&all, "abcdef00-0002").as_deref(),
            Some("ABCDEF00-0002")
        );
    }

    #[test]
    fn resolves_unique_prefix() {
        let all = records(&["11111111-0000", "6ECEA745-0001", "ABCDEF00-0002"]);
        assert_eq!(resolved_id(&all, "6ECE").as_deref(), Some("6ECEA745-0001"));
        assert_eq!(resolved_id(&all, "6ece").as_deref(), Some("6ECEA745-0001"));
    }

    #[test]
    fn exact_match_beats_earlier_prefix_match() {
        // "ABC" is a prefix of the first record and the whole id of the second.
        let all = records(&["ABCD-1", "ABC"]);
        assert_eq!(resolved_id(&all, "abc").as_deref(), Some("ABC"));
        assert_eq!(
            resolved_id(&all, "x-apple-reminder://ABC").as_deref(),
            Some("ABC")
        );
    }

    #[test]
    fn qualified_id_is_case_sensitive_but_raw_fallback_is_not() {
        let all = records(&["abc-1"]);
        // Not an exact qualified match and not a raw-id form either.
        assert_eq!(resolved_id(&all, "X-APPLE-REMINDER://ABC-1"), None);
        assert_eq!(resolved_id(&all, "ABC-1").as_deref(), Some("abc-1"));
    }

    #[test]
    fn ambiguous_prefix_takes_first_in_store_order() {
        let all = records(&["6ECE-B", "6ECE-A"]);
        assert_eq!(resolved_id(&all, "6ECE").as_deref(), Some("6ECE-B"));
    }

    #[test]
    fn no_match_is_none() {
        let all = records(&["6ECEA745-0001"]);
        assert_eq!(resolved_id(&all, "ZZZZ"), None);
    }

    #[test]
    fn run_normalizes_the_hit() {
        let fixture = StoreFixture::work_and_home();
        let normalizer = Normalizer::new(TimeContext::utc());

        let result = run(&fixture.store, "6ECE", &normalizer).unwrap();
        let reminder = result.reminder.unwrap();
        assert_eq!(reminder.id, "x-apple-reminder://6ECEA745-BBBB");
        assert_eq!(reminder.name, "Quarterly review");
    }

    #[test]
    fn run_reports_unknown_id() {
        let fixture = StoreFixture::work_and_home();
        let normalizer = Normalizer::new(TimeContext::utc());

        let err = run(&fixture.store, "ZZZZ", &normalizer).unwrap_err();
        assert_eq!(err.to_string(), "reminder not found: ZZZZ");
    }

    #[test]
    fn run_rejects_blank_id_without_fetching() {
        let fixture = StoreFixture::work_and_home();
        let normalizer = Normalizer::new(TimeContext::utc());

        assert!(matches!(
            run(&fixture.store, "  ", &normalizer),
            Err(RemError::Usage(_))
        ));
        assert_eq!(fixture.store.fetch_count(), 0);
    }
}
