mod common;

use assert_cmd::Command;
use common::trip_file;
use predicates::prelude::*;
use predicates::str::contains;

const TRIPS: &str = r#"[
    {"departure": "2024-03-25", "return_date": "2024-04-05"},
    {"departure": "2024-05-01", "return_date": "2024-05-10"},
    {"departure": "2024-06-01", "ongoing": true}
]"#;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("residency_cli").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn report_prints_table_and_totals() {
    let file = trip_file(TRIPS);
    cli()
        .args(["report", "--fy", "2024-2025", "--today", "2024-06-10", "--trips"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("FY 2024-2025"))
        .stdout(contains("Active"))
        .stdout(contains("Residency days: 25"))
        .stdout(contains("Days needed: 158"))
        .stdout(contains("Considered resident").not());
}

#[test]
fn report_defaults_to_current_fiscal_year() {
    let file = trip_file(TRIPS);
    cli()
        .args(["report", "--today", "2025-03-31", "--trips"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("FY 2024-2025"));
}

#[test]
fn report_as_json_exposes_summary() {
    let file = trip_file(TRIPS);
    let output = cli()
        .args(["report", "--json", "--fy", "2023-2024", "--today", "2024-06-10", "--trips"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["fiscal_year"], "2023-2024");
    assert_eq!(value["summary"]["residency_days"], 7);
    assert_eq!(value["trips"].as_array().map(Vec::len), Some(3));
}

#[test]
fn report_rejects_overlapping_trip_file() {
    let file = trip_file(
        r#"[
            {"departure": "2024-05-01", "return_date": "2024-05-10"},
            {"departure": "2024-05-05", "return_date": "2024-05-06"}
        ]"#,
    );
    cli()
        .args(["report", "--today", "2024-06-10", "--trips"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("Trip #2 rejected: New trip overlaps with an existing trip."));
}

#[test]
fn check_accepts_non_overlapping_trip() {
    let file = trip_file(TRIPS);
    cli()
        .args([
            "check", "--today", "2024-06-10", "--depart", "2024-04-10", "--return", "2024-04-20",
            "--trips",
        ])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("Trip accepted: 2024-04-10 to 2024-04-20"))
        .stdout(contains("Earliest").not());
}

#[test]
fn check_reports_future_return_date() {
    let file = trip_file("[]");
    cli()
        .args([
            "check", "--today", "2024-06-10", "--depart", "2024-06-01", "--return", "2024-06-30",
            "--trips",
        ])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("Return date cannot be in the future."));
}

#[test]
fn check_rejects_trip_after_ongoing_one_without_a_hint() {
    let file = trip_file(TRIPS);
    cli()
        .args(["check", "--today", "2024-06-10", "--depart", "2024-06-05", "--ongoing", "--trips"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("Earliest").not())
        .stderr(contains("overlaps"));
}

#[test]
fn check_suggests_a_departure_that_would_be_accepted() {
    let file = trip_file(r#"[{"departure": "2024-05-01", "return_date": "2024-05-10"}]"#);
    cli()
        .args([
            "check", "--today", "2024-06-10", "--depart", "2024-05-05", "--return", "2024-05-06",
            "--trips",
        ])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(contains("Earliest non-overlapping departure is 2024-05-11"))
        .stderr(contains("overlaps"));

    cli()
        .args([
            "check", "--today", "2024-06-10", "--depart", "2024-05-11", "--return", "2024-05-11",
            "--trips",
        ])
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn years_marks_current_fiscal_year() {
    cli()
        .args(["years", "--today", "2024-02-10"])
        .assert()
        .success()
        .stdout(contains("* FY 2023-2024"))
        .stdout(contains("  FY 1990-1991"))
        .stdout(contains("  FY 2028-2029"))
        .stdout(contains("FY 2029-2030").not());
}

#[test]
fn invalid_fiscal_year_label_is_a_usage_error() {
    let file = trip_file("[]");
    cli()
        .args(["report", "--fy", "2024-2026", "--trips"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("Invalid fiscal year label"));
}
