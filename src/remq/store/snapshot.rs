use super::{in_calendars, FetchCompletion, ReminderStore};
use crate::error::{RemError, Result};
use crate::model::{Calendar, RawReminder};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// On-disk layout of a store snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub calendars: Vec<Calendar>,
    #[serde(default)]
    pub reminders: Vec<RawReminder>,
}

/// Store backed by a JSON snapshot file.
///
/// The snapshot is read once at open time. Fetches are answered from a
/// worker thread, the same way a platform store calls back from its own
/// queue.
pub struct SnapshotStore {
    snapshot: Arc<Snapshot>,
}

impl SnapshotStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                RemError::StoreUnavailable(format!("no reminder store at {}", path.display()))
            }
            ErrorKind::PermissionDenied => RemError::StoreUnavailable(format!(
                "permission denied reading {}",
                path.display()
            )),
            _ => RemError::Io(e),
        })?;

        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
            RemError::StoreUnavailable(format!("unreadable store at {}: {}", path.display(), e))
        })?;

        log::debug!(
            "loaded snapshot {}: {} lists, {} reminders",
            path.display(),
            snapshot.calendars.len(),
            snapshot.reminders.len()
        );

        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }
}

impl ReminderStore for SnapshotStore {
    fn calendars(&self) -> Result<Vec<Calendar>> {
        Ok(self.snapshot.calendars.clone())
    }

    fn fetch_reminders(
        &self,
        calendars: Option<&[Calendar]>,
        on_complete: FetchCompletion,
    ) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        let selected = calendars.map(|c| c.to_vec());

        thread::Builder::new()
            .name("remq-fetch".to_string())
            .spawn(move || {
                let reminders = in_calendars(&snapshot.reminders, selected.as_deref());
                on_complete(Some(reminders));
            })
            .map_err(|e| RemError::StoreUnavailable(format!("could not start fetch: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "calendars": [
            {"id": "work-id", "title": "Work"},
            {"id": "home-id", "title": "Home"}
        ],
        "reminders": [
            {
                "calendarItemIdentifier": "6ECEA745-BBBB",
                "title": "Quarterly review",
                "calendar": {"id": "work-id", "title": "Work"}
            },
            {
                "calendarItemIdentifier": "22222222-CCCC",
                "title": "Buy milk",
                "calendar": {"id": "home-id", "title": "Home"},
                "completed": true
            }
        ]
    }"#;

    fn write_snapshot(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("reminders.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_calendars_in_file_order() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(write_snapshot(&dir, SNAPSHOT)).unwrap();

        let titles: Vec<_> = store
            .calendars()
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Work", "Home"]);
    }

    #[test]
    fn blocking_fetch_waits_for_worker() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(write_snapshot(&dir, SNAPSHOT)).unwrap();

        let all = store.reminders(None).unwrap();
        assert_eq!(all.len(), 2);

        let home = vec![Calendar::new("home-id", "Home")];
        let only_home = store.reminders(Some(home.as_slice())).unwrap();
        assert_eq!(only_home.len(), 1);
        assert!(only_home[0].completed);
    }

    #[test]
    fn missing_file_is_store_unavailable() {
        let dir = TempDir::new().unwrap();
        match SnapshotStore::open(dir.path().join("nope.json")) {
            Err(RemError::StoreUnavailable(msg)) => assert!(msg.contains("no reminder store")),
            other => panic!("Expected StoreUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_file_is_store_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = write_snapshot(&dir, "{not json");
        assert!(matches!(
            SnapshotStore::open(path),
            Err(RemError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn empty_object_is_an_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(write_snapshot(&dir, "{}")).unwrap();
        assert!(store.calendars().unwrap().is_empty());
        assert!(store.reminders(None).unwrap().is_empty());
    }
}
