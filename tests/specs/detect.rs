//! Behavioral specs for `pathgate detect`, the GitHub Action entry point.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// PULL REQUEST RUNS
// =============================================================================

#[test]
fn matching_change_sets_output_true() {
    let mut server = mockito::Server::new();
    let mock = mock_pr_files(
        &mut server,
        &["src/a.go", "src/generated/x.go", "docs/readme.md"],
    );
    let runner = ActionRunner::pull_request()
        .patterns(&["src/**", "!src/generated/**"])
        .api_url(server.url());

    runner
        .command()
        .assert()
        .success()
        .stdout(predicates::str::contains("Changed files (3):"))
        .stdout(predicates::str::contains("Files match filter: true"));

    assert_eq!(runner.output(), "changed=true\n");
    mock.assert();
}

#[test]
fn excluded_changes_set_output_false() {
    let mut server = mockito::Server::new();
    mock_pr_files(&mut server, &["src/generated/x.go", "docs/readme.md"]);
    let runner = ActionRunner::pull_request()
        .patterns(&["src/**", "!src/generated/**"])
        .api_url(server.url());

    runner.command().assert().success();

    assert_eq!(runner.output(), "changed=false\n");
}

#[test]
fn negative_only_patterns_include_by_default() {
    let mut server = mockito::Server::new();
    mock_pr_files(&mut server, &["README.md"]);
    let runner = ActionRunner::pull_request()
        .patterns(&["!node_modules/**"])
        .api_url(server.url());

    runner.command().assert().success();

    assert_eq!(runner.output(), "changed=true\n");
}

#[test]
fn json_report_lists_included_files() {
    let mut server = mockito::Server::new();
    mock_pr_files(&mut server, &["src/a.go", "docs/readme.md"]);
    let runner = ActionRunner::pull_request()
        .patterns(&["src/**"])
        .api_url(server.url())
        .arg("-o")
        .arg("json");

    let output = runner.command().output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], true);
    assert_eq!(report["included"], serde_json::json!(["src/a.go"]));
}

#[test]
fn config_file_sets_output_key() {
    let mut server = mockito::Server::new();
    mock_pr_files(&mut server, &["docs/guide.md"]);
    let runner = ActionRunner::pull_request()
        .patterns(&["docs/**"])
        .api_url(server.url())
        .file("pathgate.toml", "version = 1\n[output]\nkey = \"docs\"\n");

    runner.command().assert().success();

    assert_eq!(runner.output(), "docs=true\n");
}

#[test]
fn output_key_flag_overrides_config() {
    let mut server = mockito::Server::new();
    mock_pr_files(&mut server, &["docs/guide.md"]);
    let runner = ActionRunner::pull_request()
        .patterns(&["docs/**"])
        .api_url(server.url())
        .file("pathgate.toml", "version = 1\n[output]\nkey = \"docs\"\n")
        .arg("--output-key")
        .arg("guide");

    runner.command().assert().success();

    assert_eq!(runner.output(), "guide=true\n");
}

// =============================================================================
// NO PULL REQUEST CONTEXT
// =============================================================================

#[test]
fn push_event_yields_false_without_network() {
    let runner = ActionRunner::push()
        .patterns(&["**"])
        .api_url("http://127.0.0.1:9");

    runner
        .command()
        .assert()
        .success()
        .stdout(predicates::str::contains("Changed files (0):"));

    assert_eq!(runner.output(), "changed=false\n");
}

#[test]
fn missing_token_yields_false() {
    let runner = ActionRunner::pull_request()
        .without_token()
        .patterns(&["**"])
        .api_url("http://127.0.0.1:9");

    runner.command().assert().success();

    assert_eq!(runner.output(), "changed=false\n");
}

// =============================================================================
// FAILURE POLICY
// =============================================================================

#[test]
fn missing_patterns_is_non_fatal() {
    let runner = ActionRunner::push();

    runner
        .command()
        .assert()
        .success()
        .stderr(predicates::str::contains("file-patterns"));

    assert_eq!(runner.output(), "changed=false\n");
}

#[test]
fn missing_patterns_is_fatal_when_strict() {
    let runner = ActionRunner::push().arg("--strict");

    runner
        .command()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("file-patterns"));

    assert_eq!(runner.output(), "");
}

#[test]
fn api_error_is_non_fatal() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/repos/octo/repo/pulls/7/files")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create();
    let runner = ActionRunner::pull_request()
        .patterns(&["**"])
        .api_url(server.url());

    runner
        .command()
        .assert()
        .success()
        .stderr(predicates::str::contains("HTTP 500"));

    assert_eq!(runner.output(), "changed=false\n");
}

#[test]
fn api_error_exits_internal_when_strict() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/repos/octo/repo/pulls/7/files")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create();
    let runner = ActionRunner::pull_request()
        .patterns(&["**"])
        .api_url(server.url())
        .arg("--strict");

    runner.command().assert().code(3);

    assert_eq!(runner.output(), "");
}

#[test]
fn invalid_config_is_non_fatal() {
    let runner = ActionRunner::push()
        .patterns(&["**"])
        .file("pathgate.toml", "version = 9\n");

    runner
        .command()
        .assert()
        .success()
        .stderr(predicates::str::contains("unsupported config version"));

    assert_eq!(runner.output(), "changed=false\n");
}

#[test]
fn invalid_config_exits_config_error_when_strict() {
    let runner = ActionRunner::push()
        .patterns(&["**"])
        .file("pathgate.toml", "version = 9\n")
        .arg("--strict");

    runner.command().assert().code(2);
}
