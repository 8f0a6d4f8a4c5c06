use assert_cmd::Command;
use chrono::{Datelike, Duration, Utc};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two lists: Work holds one finished and one pending reminder, Home one.
fn work_and_home() -> Value {
    json!({
        "calendars": [
            {"id": "work-id", "title": "Work"},
            {"id": "home-id", "title": "Home"}
        ],
        "reminders": [
            {
                "calendarItemIdentifier": "11111111-AAAA",
                "title": "File expenses",
                "calendar": {"id": "work-id", "title": "Work"},
                "completed": true,
                "completionDate": "2025-02-01T08:30:00Z"
            },
            {
                "calendarItemIdentifier": "6ECEA745-BBBB",
                "title": "Quarterly review",
                "notes": "Prepare the slides",
                "calendar": {"id": "work-id", "title": "Work"},
                "priority": 1,
                "dueDateComponents": {"year": 2025, "month": 2, "day": 13, "utcOffsetSeconds": 0}
            },
            {
                "calendarItemIdentifier": "22222222-CCCC",
                "title": "Buy milk",
                "calendar": {"id": "home-id", "title": "Home"}
            }
        ]
    })
}

struct Env {
    dir: TempDir,
    store: PathBuf,
}

fn setup(snapshot: &Value) -> Env {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("reminders.json");
    std::fs::write(&store, snapshot.to_string()).unwrap();
    Env { dir, store }
}

fn remq(env: &Env) -> Command {
    remq_with_store(env.dir.path(), &env.store)
}

fn remq_with_store(home: &Path, store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remq").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG")
        .arg("--store")
        .arg(store)
        .arg("--timezone")
        .arg("utc");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_lists_counts_every_list() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("lists")
        .assert()
        .success()
        .stdout(
            "[{\"id\":\"work-id\",\"name\":\"Work\",\"count\":2},{\"id\":\"home-id\",\"name\":\"Home\",\"count\":1}]\n",
        );
}

#[test]
fn test_lists_includes_empty_list() {
    let mut snapshot = work_and_home();
    snapshot["calendars"]
        .as_array_mut()
        .unwrap()
        .push(json!({"id": "errands-id", "title": "Errands"}));
    let env = setup(&snapshot);

    let lists = stdout_json(remq(&env).arg("lists"));
    assert_eq!(lists[2], json!({"id": "errands-id", "name": "Errands", "count": 0}));
}

#[test]
fn test_reminders_in_list_and_incomplete() {
    let env = setup(&work_and_home());

    let reminders = stdout_json(
        remq(&env)
            .arg("reminders")
            .arg("--list")
            .arg("Work")
            .arg("--completed")
            .arg("false"),
    );

    assert_eq!(
        reminders,
        json!([{
            "id": "x-apple-reminder://6ECEA745-BBBB",
            "name": "Quarterly review",
            "listName": "Work",
            "completed": false,
            "flagged": false,
            "priority": 1,
            "dueDate": "2025-02-13T00:00:00.000Z",
            "body": "Prepare the slides"
        }])
    );
}

#[test]
fn test_reminders_list_name_is_case_insensitive() {
    let env = setup(&work_and_home());

    let reminders = stdout_json(remq(&env).arg("reminders").arg("--list").arg("hOmE"));
    assert_eq!(reminders.as_array().unwrap().len(), 1);
    assert_eq!(reminders[0]["name"], "Buy milk");
}

#[test]
fn test_reminders_search_and_due_window() {
    let env = setup(&work_and_home());

    let found = stdout_json(remq(&env).arg("reminders").arg("--search").arg("SLIDES"));
    assert_eq!(found.as_array().unwrap().len(), 1);

    let due = stdout_json(
        remq(&env)
            .arg("reminders")
            .arg("--due-after")
            .arg("2025-02-13T00:00:00Z")
            .arg("--due-before")
            .arg("2025-02-13"),
    );
    assert_eq!(due.as_array().unwrap().len(), 1);
    assert_eq!(due[0]["id"], "x-apple-reminder://6ECEA745-BBBB");
}

#[test]
fn test_reminders_unknown_list() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("reminders")
        .arg("--list")
        .arg("Nonexistent")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("{\"error\":\"list not found: Nonexistent\"}\n");
}

#[test]
fn test_reminders_invalid_date() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("reminders")
        .arg("--due-before")
        .arg("someday")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid date: someday"));
}

#[test]
fn test_get_by_prefix() {
    let env = setup(&work_and_home());

    let reminder = stdout_json(remq(&env).arg("get").arg("6ECE"));
    assert_eq!(reminder["id"], "x-apple-reminder://6ECEA745-BBBB");
    assert_eq!(reminder["listName"], "Work");
}

#[test]
fn test_get_by_full_identifier() {
    let env = setup(&work_and_home());

    let reminder = stdout_json(
        remq(&env)
            .arg("get")
            .arg("x-apple-reminder://22222222-CCCC"),
    );
    assert_eq!(reminder["name"], "Buy milk");
}

#[test]
fn test_get_not_found() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("get")
        .arg("ZZZZ")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("{\"error\":\"reminder not found: ZZZZ\"}\n");
}

#[test]
fn test_usage_errors_are_json() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("{\"error\":"));

    remq(&env)
        .arg("get")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("{\"error\":"));

    remq(&env)
        .arg("reminders")
        .arg("--completed")
        .arg("maybe")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("{\"error\":"));
}

#[test]
fn test_help_exits_cleanly() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reminders"));
}

#[test]
fn test_missing_store() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    remq_with_store(dir.path(), &missing)
        .arg("lists")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("store unavailable"));
}

#[test]
fn test_malformed_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("broken.json");
    std::fs::write(&store, "{ not json").unwrap();

    remq_with_store(dir.path(), &store)
        .arg("reminders")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("store unavailable"));
}

#[test]
fn test_stats() {
    let env = setup(&work_and_home());

    let stats = stdout_json(remq(&env).arg("stats"));
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["incomplete"], 2);
    assert_eq!(stats["flagged"], 0);
    // The review was due in February 2025.
    assert_eq!(stats["overdue"], 1);
    assert_eq!(stats["completionRate"], 33.3);
    assert_eq!(stats["lists"].as_array().unwrap().len(), 2);
}

#[test]
fn test_overdue_and_upcoming() {
    let mut snapshot = work_and_home();
    let soon = Utc::now() + Duration::days(2);
    snapshot["reminders"].as_array_mut().unwrap().push(json!({
        "calendarItemIdentifier": "33333333-DDDD",
        "title": "Water plants",
        "calendar": {"id": "home-id", "title": "Home"},
        "dueDateComponents": {
            "year": soon.year(),
            "month": soon.month(),
            "day": soon.day(),
            "hour": 12,
            "utcOffsetSeconds": 0
        }
    }));
    let env = setup(&snapshot);

    let overdue = stdout_json(remq(&env).arg("overdue"));
    assert_eq!(overdue.as_array().unwrap().len(), 1);
    assert_eq!(overdue[0]["name"], "Quarterly review");

    let upcoming = stdout_json(remq(&env).arg("upcoming"));
    assert_eq!(upcoming.as_array().unwrap().len(), 1);
    assert_eq!(upcoming[0]["name"], "Water plants");

    let none_at_work = stdout_json(remq(&env).arg("upcoming").arg("--list").arg("work"));
    assert_eq!(none_at_work, json!([]));
}

#[test]
fn test_upcoming_days_out_of_range() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("upcoming")
        .arg("--days")
        .arg(u32::MAX.to_string())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("days out of range"));
}

#[test]
fn test_export_csv_to_stdout() {
    let env = setup(&work_and_home());

    let output = remq(&env)
        .arg("export")
        .arg("-l")
        .arg("work")
        .arg("--incomplete")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let csv = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        vec![
            "id,name,body,list_name,due_date,remind_me_date,priority,priority_label,flagged,completed,url",
            "x-apple-reminder://6ECEA745-BBBB,Quarterly review,Prepare the slides,Work,2025-02-13T00:00:00,,1,high,false,false,",
        ]
    );
}

#[test]
fn test_export_json_to_file() {
    let env = setup(&work_and_home());
    let target = env.dir.path().join("export.json");

    remq(&env)
        .arg("export")
        .arg("--output-file")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let exported: Value =
        serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    let records = exported.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["completed"], true);
    assert_eq!(records[0]["completion_date"], "2025-02-01T08:30:00");
    assert_eq!(records[2]["name"], "Buy milk");
    assert_eq!(records[2]["list_name"], "Home");
    assert_eq!(records[2]["priority_label"], "none");
}

#[test]
fn test_export_rejects_unknown_format() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("export")
        .arg("--format")
        .arg("xml")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("{\"error\":"));
}

#[test]
fn test_pretty_output() {
    let env = setup(&work_and_home());

    remq(&env)
        .arg("lists")
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  {"));
}
