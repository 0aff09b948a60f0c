//! Smoke tests to verify command wiring

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("in-memory store"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_db_seed_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("db").arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("default categories"));
}

#[test]
fn test_invalid_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server\nbind =").unwrap();

    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--config")
        .arg(file.path())
        .arg("serve")
        .arg("--memory");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_bad_bind_in_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nbind = \"not-an-address\"").unwrap();

    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--config")
        .arg(file.path())
        .env_remove("TRIVIA_BIND")
        .arg("serve")
        .arg("--memory");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bind address"));
}
