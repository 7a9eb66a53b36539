// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub Actions integration.
//!
//! Resolves the pull request that triggered the workflow from the runner
//! environment and lists its changed files through the REST API. Anything
//! short of a pull request event with a payload, a repository, and a token
//! yields no pull request, which callers treat as an empty file list.

mod client;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use client::{DEFAULT_API_URL, GitHubClient, MAX_PER_PAGE};

/// Environment variable names read from the Actions runner.
pub mod names {
    pub const EVENT_NAME: &str = "GITHUB_EVENT_NAME";
    pub const EVENT_PATH: &str = "GITHUB_EVENT_PATH";
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    /// Token variables, in lookup order.
    pub const TOKENS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];
    /// Action input consulted when no token variable is set.
    pub const TOKEN_INPUT: &str = "github_token";
}

/// Events that carry a pull request payload.
const PULL_REQUEST_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];

/// Errors from the pull request lookup.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Json(#[source] serde_json::Error),

    #[error("failed to read event payload {}: {source}", .path.display())]
    EventIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload {}: {source}", .path.display())]
    EventJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Environment variable name the runner uses for an action input.
///
/// Spaces become underscores and the name is uppercased; hyphens are kept,
/// so `file-patterns` is read from `INPUT_FILE-PATTERNS`.
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Workflow context captured from the runner environment.
#[derive(Clone, Default)]
pub struct ActionEnv {
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
    pub repository: Option<String>,
    pub token: Option<String>,
}

impl fmt::Debug for ActionEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionEnv")
            .field("event_name", &self.event_name)
            .field("event_path", &self.event_path)
            .field("repository", &self.repository)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// The pull request under test, with the credentials to query it.
#[derive(Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub token: String,
}

impl fmt::Debug for PullRequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullRequestContext")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("number", &self.number)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestRef>,
}

#[derive(Deserialize)]
struct PullRequestRef {
    number: Option<u64>,
}

impl ActionEnv {
    /// Capture the context from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture the context from an arbitrary lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            event_name: get(names::EVENT_NAME),
            event_path: get(names::EVENT_PATH).map(PathBuf::from),
            repository: get(names::REPOSITORY),
            token: names::TOKENS
                .iter()
                .find_map(|key| get(key))
                .or_else(|| get(&input_env_name(names::TOKEN_INPUT))),
        }
    }

    pub fn is_pull_request_event(&self) -> bool {
        self.event_name
            .as_deref()
            .is_some_and(|name| PULL_REQUEST_EVENTS.contains(&name))
    }

    /// Resolve the triggering pull request.
    ///
    /// Returns `Ok(None)` when the workflow was not triggered by a pull
    /// request or the context is incomplete. A payload file that exists but
    /// cannot be read or parsed is an error.
    pub fn pull_request(&self) -> Result<Option<PullRequestContext>, GitHubError> {
        if !self.is_pull_request_event() {
            tracing::debug!("event {:?} is not a pull request event", self.event_name);
            return Ok(None);
        }

        let Some(event_path) = self.event_path.as_deref().filter(|p| p.exists()) else {
            tracing::debug!("event payload not found");
            return Ok(None);
        };

        let Some(number) = read_pull_request_number(event_path)? else {
            tracing::debug!("event payload has no pull request number");
            return Ok(None);
        };

        let mut parts = self.repository.as_deref().unwrap_or_default().split('/');
        let owner = parts.next().unwrap_or_default();
        let repo = parts.next().unwrap_or_default();

        match (owner, repo, self.token.as_deref()) {
            ("", _, _) | (_, "", _) | (_, _, None) => {
                tracing::debug!("repository or token missing");
                Ok(None)
            }
            (owner, repo, Some(token)) => Ok(Some(PullRequestContext {
                owner: owner.to_string(),
                repo: repo.to_string(),
                number,
                token: token.to_string(),
            })),
        }
    }
}

fn read_pull_request_number(path: &Path) -> Result<Option<u64>, GitHubError> {
    let content = std::fs::read_to_string(path).map_err(|source| GitHubError::EventIo {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|source| GitHubError::EventJson {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(payload
        .pull_request
        .and_then(|pr| pr.number)
        .filter(|&n| n > 0))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
