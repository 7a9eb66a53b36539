//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the pathgate binary as a GitHub Action
//! step or as a local command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Runner variables that must not leak in from the host environment.
const ACTION_VARS: &[&str] = &[
    "GITHUB_EVENT_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_REPOSITORY",
    "GITHUB_TOKEN",
    "GH_TOKEN",
    "INPUT_GITHUB_TOKEN",
    "INPUT_FILE-PATTERNS",
    "GITHUB_OUTPUT",
    "GITHUB_API_URL",
    "PATHGATE_CONFIG",
    "PATHGATE_LOG",
];

/// Returns a Command configured to run the pathgate binary in a clean environment
pub fn pathgate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pathgate"));
    for var in ACTION_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A simulated Actions runner: workspace, event payload, and output file.
pub struct ActionRunner {
    dir: TempDir,
    event: &'static str,
    patterns: Option<String>,
    token: Option<&'static str>,
    api_url: Option<String>,
    args: Vec<String>,
}

impl ActionRunner {
    /// A `pull_request` run for octo/repo#7.
    pub fn pull_request() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("event.json"),
            r#"{"action":"synchronize","pull_request":{"number":7}}"#,
        )
        .unwrap();
        Self {
            dir,
            event: "pull_request",
            patterns: None,
            token: Some("secret"),
            api_url: None,
            args: Vec::new(),
        }
    }

    /// A `push` run; no pull request context.
    pub fn push() -> Self {
        Self {
            event: "push",
            ..Self::pull_request()
        }
    }

    pub fn patterns(mut self, lines: &[&str]) -> Self {
        let text: String = lines.iter().map(|l| format!("- \"{l}\"\n")).collect();
        self.patterns = Some(text);
        self
    }

    pub fn without_token(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Write a file into the workspace (e.g. pathgate.toml).
    pub fn file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.dir.path().join(name), content).unwrap();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("github_output")
    }

    /// Contents of the action output file ("" if never written).
    pub fn output(&self) -> String {
        std::fs::read_to_string(self.output_path()).unwrap_or_default()
    }

    pub fn command(&self) -> Command {
        let mut cmd = pathgate_cmd();
        cmd.current_dir(self.dir.path())
            .arg("detect")
            .args(&self.args)
            .env("GITHUB_EVENT_NAME", self.event)
            .env("GITHUB_EVENT_PATH", self.dir.path().join("event.json"))
            .env("GITHUB_REPOSITORY", "octo/repo")
            .env("GITHUB_OUTPUT", self.output_path());
        if let Some(patterns) = &self.patterns {
            cmd.env("INPUT_FILE-PATTERNS", patterns);
        }
        if let Some(token) = self.token {
            cmd.env("GITHUB_TOKEN", token);
        }
        if let Some(url) = &self.api_url {
            cmd.env("GITHUB_API_URL", url);
        }
        cmd
    }
}

/// Mock the files listing for octo/repo#7 as a single page.
pub fn mock_pr_files(server: &mut mockito::ServerGuard, files: &[&str]) -> mockito::Mock {
    let body = serde_json::to_string(
        &files
            .iter()
            .map(|f| serde_json::json!({ "filename": f }))
            .collect::<Vec<_>>(),
    )
    .unwrap();
    server
        .mock("GET", "/repos/octo/repo/pulls/7/files")
        .match_query(mockito::Matcher::Any)
        .match_header("authorization", "token secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}
