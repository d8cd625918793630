//! CLI binary tests
//!
//! Skipped during coverage builds, where binaries are not exercised.

#![cfg(not(coverage))]

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use quiz_grader::excel::GradebookImporter;
use quiz_grader::CellValue;
use tempfile::TempDir;

fn quiz_grader() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quiz-grader"))
}

#[test]
fn test_process_writes_results() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");

    quiz_grader()
        .current_dir(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Best Pop quiz Result"))
        .stdout(predicate::str::contains("Graded 4 students"));

    let output = dir.path().join("pop_quiz_results.xlsx");
    let sheet = GradebookImporter::open(&output).unwrap().import().unwrap();
    assert_eq!(sheet.row_count(), 5);
    assert_eq!(sheet.rows[4][9], CellValue::Number(9.75));
}

#[test]
fn test_process_custom_range_and_output() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");
    let output = dir.path().join("best_one.xlsx");

    quiz_grader()
        .args(["process", "--start", "6", "--end", "8", "--best-of", "1", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let sheet = GradebookImporter::open(&output).unwrap().import().unwrap();
    let best: Vec<CellValue> = sheet.data_rows().iter().map(|r| r[9].clone()).collect();
    assert_eq!(
        best,
        vec![
            CellValue::Number(9.0),
            CellValue::Number(10.0),
            CellValue::Number(0.0),
            CellValue::Number(10.0),
        ]
    );
}

#[test]
fn test_process_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");

    quiz_grader()
        .current_dir(dir.path())
        .args(["process", "--dry-run"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run complete"));

    assert!(!dir.path().join("pop_quiz_results.xlsx").exists());
}

#[test]
fn test_process_writes_report() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");
    let report = dir.path().join("report.json");

    quiz_grader()
        .current_dir(dir.path())
        .arg("process")
        .arg(&input)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["summary"]["students"], 4);
    assert_eq!(json["summary"]["graded"], 3);
    assert_eq!(json["summary"]["highest"], 9.75);
}

#[test]
fn test_process_inverted_range_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");

    quiz_grader()
        .args(["process", "--start", "8", "--end", "6"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Start column index cannot be greater than the end column index.",
        ));
}

#[test]
fn test_process_zero_best_of_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");

    quiz_grader()
        .args(["process", "--best-of", "0"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive numbers"));
}

#[test]
fn test_process_wrong_extension_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("grades.csv");
    std::fs::write(&input, "name,q1\nada,7\n").unwrap();

    quiz_grader()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));
}

#[test]
fn test_process_missing_file_fails() {
    quiz_grader()
        .args(["process", "nonexistent.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_inspect_lists_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_gradebook(dir.path(), "grades.xlsx");

    quiz_grader()
        .arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz 1"))
        .stdout(predicate::str::contains("data rows"));
}

#[test]
fn test_help() {
    quiz_grader()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("inspect"));
}
