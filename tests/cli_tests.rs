mod common;
use common::{crew, fixture_path, setup_test_db, temp_out};

use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

/// Fresh database with the roster fixture imported.
fn imported_db(name: &str) -> String {
    let db_path = setup_test_db(name);

    crew()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    crew()
        .args(["--db", &db_path, "parse", &fixture_path()])
        .assert()
        .success()
        .stderr(contains("Imported 10 activities"));

    db_path
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    crew()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stderr(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_parse_prints_activity_table() {
    let db_path = setup_test_db("cli_parse_table");

    crew()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    crew()
        .args(["--db", &db_path, "parse", &fixture_path()])
        .assert()
        .success()
        .stdout(contains("OCCURRED AT"))
        .stdout(contains("FLT"))
        .stdout(contains("2022-01-10 08:45:00"));
}

#[test]
fn test_list_filters_by_type() {
    let db_path = imported_db("cli_list_type");

    crew()
        .args(["--db", &db_path, "list", "--type", "flt", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""type": "FLT""#))
        .stdout(contains(r#""to": "CPH""#))
        .stdout(contains(r#""type": "CI""#).not());
}

#[test]
fn test_list_filters_by_date() {
    let db_path = imported_db("cli_list_date");

    crew()
        .args([
            "--db", &db_path, "list", "--from", "22-01-2022", "--to", "22-01-2022",
        ])
        .assert()
        .success()
        .stdout(contains("EBJ"))
        .stdout(contains("UNK"))
        .stdout(contains("2022-01-10").not());
}

#[test]
fn test_list_without_matches() {
    let db_path = imported_db("cli_list_empty");

    crew()
        .args(["--db", &db_path, "list", "--location", "AAL"])
        .assert()
        .success()
        .stdout(contains("No activities found."));
}

#[test]
fn test_list_rejects_bad_filters() {
    let db_path = setup_test_db("cli_list_bad");

    crew()
        .args(["--db", &db_path, "list", "--location", "krp"])
        .assert()
        .failure()
        .stderr(contains("Invalid airport code"));

    crew()
        .args(["--db", &db_path, "list", "--type", "XYZ"])
        .assert()
        .failure()
        .stderr(contains("Invalid activity type: XYZ"));

    crew()
        .args(["--db", &db_path, "list", "--from", "2022-01-10"])
        .assert()
        .failure()
        .stderr(contains("expected DD-MM-YYYY"));
}

#[test]
fn test_parse_unknown_format_fails() {
    let db_path = setup_test_db("cli_parse_json");

    crew()
        .args(["--db", &db_path, "parse", &fixture_path(), "--format", "json"])
        .assert()
        .failure()
        .stderr(contains("Parser for format json not found"));
}

#[test]
fn test_parse_invalid_report_fails() {
    let db_path = setup_test_db("cli_parse_invalid");
    let page = temp_out("cli_parse_invalid", "html");
    fs::write(&page, "<html><body><p>Login</p></body></html>").unwrap();

    crew()
        .args(["--db", &db_path, "parse", &page])
        .assert()
        .failure()
        .stderr(contains("Invalid report"));

    fs::remove_file(&page).ok();
}

#[test]
fn test_parse_dry_run_stores_nothing() {
    let db_path = setup_test_db("cli_parse_dry");

    crew()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    crew()
        .args(["--db", &db_path, "parse", &fixture_path(), "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""type": "FLT""#))
        .stdout(contains(r#""id""#).not());

    crew()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No activities found."));
}

#[test]
fn test_export_csv() {
    let db_path = imported_db("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");

    crew()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stderr(contains("CSV export completed: 10 activities"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,type,location,to,occurred_at,scheduled_time_departure,scheduled_time_arrival")
    );
    assert_eq!(lines.count(), 10);
    assert!(content.contains("2,FLT,KRP,CPH,2022-01-10 00:00:00,2022-01-10 08:45:00,2022-01-10 09:35:00"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_json_with_filter() {
    let db_path = imported_db("cli_export_json");
    let out = temp_out("cli_export_json", "json");

    crew()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--type", "CI",
            "--force",
        ])
        .assert()
        .success();

    let items: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i["type"] == "CI"));
    assert!(items.iter().all(|i| i["to"] == ""));

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_nothing_to_write() {
    let db_path = imported_db("cli_export_empty");
    let out = temp_out("cli_export_empty", "csv");

    crew()
        .args(["--db", &db_path, "export", "--file", &out, "--location", "AAL"])
        .assert()
        .success()
        .stderr(contains("Nothing to export"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_log_records_operations() {
    let db_path = imported_db("cli_log");

    crew()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("Imported 10 activities (html)"));
}

#[test]
fn test_db_info() {
    let db_path = imported_db("cli_db_info");

    crew()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total activities:"))
        .stdout(contains("2022-01-10 00:00:00"))
        .stdout(contains("2022-01-22 05:55:00"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = imported_db("cli_db_migrate");

    crew()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stderr(contains("up to date"));
}
