use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_subcommand_shows_usage() {
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_subcommand_fails() {
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.arg("foobar").assert().failure().stderr(predicate::str::contains("error"));
}

#[test]
fn identify_reports_nonexistent_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.args(["identify", "--model-dir", dir.path().to_str().unwrap(), "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening input file"));
}

#[test]
fn identify_runs_single_threaded_against_an_empty_model_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.args(["identify", "--model-dir", dir.path().to_str().unwrap(), "--relevant-langs", "en,de"])
        .write_stdin("Hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn identify_rejects_unknown_language_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.args(["identify", "--model-dir", dir.path().to_str().unwrap(), "--relevant-langs", "notalang"])
        .write_stdin("Hello\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn train_rejects_relative_input_file_path() {
    let output = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.args(["train", output.path().to_str().unwrap(), "one.txt", "--languages", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not absolute"));
}

#[test]
fn train_rejects_mismatched_language_and_file_counts() {
    let output = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lingid").unwrap();
    cmd.args(["train", output.path().to_str().unwrap(), "one.txt", "two.txt", "--languages", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected one --languages entry"));
}
