//! End-to-end tests for the `tenzies` CLI binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `tenzies` pointed at a store file inside `dir`.
fn tenzies(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tenzies").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("TENZIES_SEED")
        .arg("--store")
        .arg(dir.path().join("scores.json"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("tenzies")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("best"))
        .stdout(predicate::str::contains("reset"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn best_without_store_reports_no_record() {
    let dir = TempDir::new().unwrap();
    tenzies(&dir)
        .arg("best")
        .assert()
        .success()
        .stdout(predicate::str::contains("no record yet"));
}

#[test]
fn best_reads_stored_value() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scores.json"), r#"{"score":"7"}"#).unwrap();
    tenzies(&dir)
        .arg("best")
        .assert()
        .success()
        .stdout(predicate::str::contains("7 rolls"));
}

#[test]
fn best_survives_corrupt_store() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scores.json"), "not json at all").unwrap();
    tenzies(&dir)
        .arg("best")
        .assert()
        .success()
        .stdout(predicate::str::contains("no record yet"));
}

#[test]
fn best_treats_garbage_value_as_unset() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scores.json"), r#"{"score":"lots"}"#).unwrap();
    tenzies(&dir)
        .arg("best")
        .assert()
        .success()
        .stdout(predicate::str::contains("no record yet"));
}

#[test]
fn reset_clears_best() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, r#"{"score":"12"}"#).unwrap();

    tenzies(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Best score cleared"));

    tenzies(&dir)
        .arg("best")
        .assert()
        .success()
        .stdout(predicate::str::contains("no record yet"));
}

#[test]
fn play_status_then_quit() {
    let dir = TempDir::new().unwrap();
    tenzies(&dir)
        .args(["play", "--seed", "3"])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll Count: 0"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_roll_and_hold() {
    let dir = TempDir::new().unwrap();
    tenzies(&dir)
        .args(["play", "--seed", "3"])
        .write_stdin("hold 1 2\nroll\nroll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll Count: 2"))
        .stdout(predicate::str::contains("<"));
}

#[test]
fn play_rejects_bad_die_number() {
    let dir = TempDir::new().unwrap();
    tenzies(&dir)
        .args(["play", "--seed", "3"])
        .write_stdin("hold 11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no die 11"));
}

#[test]
fn play_ends_on_eof() {
    let dir = TempDir::new().unwrap();
    tenzies(&dir)
        .args(["play", "--seed", "3"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting"));
}

#[test]
fn play_same_seed_same_board() {
    let dir = TempDir::new().unwrap();
    let first = tenzies(&dir)
        .args(["play", "--seed", "99"])
        .write_stdin("roll\n")
        .output()
        .unwrap();
    let second = tenzies(&dir)
        .args(["play", "--seed", "99"])
        .write_stdin("roll\n")
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}
