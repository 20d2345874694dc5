//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--db-host"));
}

#[test]
fn test_schema_prints_ddl_without_database() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("schema");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS Members"))
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS WorkoutSessions"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gymctl"));
}

#[test]
fn test_serve_rejects_bad_bind() {
    let mut cmd = Command::cargo_bin("gymctl").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}
