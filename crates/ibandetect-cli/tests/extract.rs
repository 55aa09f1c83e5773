//! Integration tests for the extract and config subcommands.
//!
//! These exercise the text-only paths, which need no OCR models.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("ibandetect").unwrap()
}

#[test]
fn extract_from_stdin() {
    cmd()
        .args(["extract", "--quiet"])
        .write_stdin("Ziraat Bankasi\nTR330006100519786457841326\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TR33 0006 1005 1978 6457 8413 26"));
}

#[test]
fn extract_preserves_first_match() {
    cmd()
        .args(["extract", "--quiet"])
        .write_stdin("TR330006100519786457841326\nTR440006100519786457841399\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TR33 0006 1005 1978 6457 8413 26"));
}

#[test]
fn extract_no_match_fails() {
    cmd()
        .arg("extract")
        .write_stdin("no iban here\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid IBAN found"));
}

#[test]
fn extract_json_output() {
    cmd()
        .args(["extract", "--format", "json"])
        .write_stdin("TR33 0006 1005 1978 6457 8413 26\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"formatted\""))
        .stdout(predicate::str::contains("TR33 0006 1005 1978 6457 8413 26"));
}

#[test]
fn extract_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ocr.txt");
    std::fs::write(&path, "fatura\nTR33 0006 1005 1978 6457 8413 26\n").unwrap();

    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched line: TR33 0006"));
}

#[test]
fn config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    cmd()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();

    cmd()
        .args(["--config", path.to_str().unwrap(), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_image_size"));
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    cmd()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
