//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn hackistan() -> Command {
    Command::cargo_bin("hackistan").unwrap()
}

#[test]
fn test_help_lists_commands() {
    hackistan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    hackistan()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--request-timeout-secs"))
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("Load demo data into an empty database"));
}

#[test]
fn test_seed_help() {
    hackistan()
        .arg("seed")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_invalid_bind_address_is_rejected() {
    hackistan()
        .arg("serve")
        .arg("--bind")
        .arg("not-an-address")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let dir = std::env::temp_dir();
    hackistan()
        .arg("migrate")
        .env_remove("DATABASE_URL")
        .env("HOME", &dir)
        .current_dir(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}
