//! Behavioral specs for top-level CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn bare_invocation_shows_help() {
    pathgate_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

#[test]
fn help_lists_commands() {
    pathgate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("detect").and(predicates::str::contains("match")));
}

#[test]
fn version_exits_successfully() {
    pathgate_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("pathgate"));
}

#[test]
fn unknown_command_fails() {
    pathgate_cmd().arg("frobnicate").assert().failure();
}
