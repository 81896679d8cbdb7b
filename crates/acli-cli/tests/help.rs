//! Help output for the command tree.

use assert_cmd::Command;
use predicates::prelude::*;

fn acli() -> Command {
    Command::cargo_bin("acli").expect("Binary should be built")
}

#[test]
fn test_help() {
    acli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("items"));
}

#[test]
fn test_config_help() {
    acli()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage configuration settings"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn test_config_set_help_mentions_prompt() {
    acli()
        .args(["config", "set", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("will prompt if not provided"));
}
