// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking REST client for the pull request files listing.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;

use super::{GitHubError, PullRequestContext};
use crate::config::GitHubConfig;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size the files endpoint accepts.
pub const MAX_PER_PAGE: u32 = 100;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

pub struct GitHubClient {
    http: Client,
    api_url: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig, api_url: &str) -> Result<Self, GitHubError> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            per_page: config.per_page.clamp(1, MAX_PER_PAGE),
        })
    }

    /// List every file touched by the pull request, following pagination.
    ///
    /// Stops at the first page that is not a JSON array, is empty, or is
    /// shorter than the page size.
    pub fn pull_request_files(&self, pr: &PullRequestContext) -> Result<Vec<String>, GitHubError> {
        let mut files = Vec::new();

        for page in 1.. {
            let Some(entries) = self.fetch_page(pr, page)? else {
                break;
            };
            if entries.is_empty() {
                break;
            }

            let count = entries.len();
            files.extend(
                entries
                    .iter()
                    .filter_map(|entry| entry.get("filename").and_then(Value::as_str))
                    .filter(|name| !name.is_empty())
                    .map(String::from),
            );

            if count < self.per_page as usize {
                break;
            }
        }

        tracing::debug!(
            "fetched {} changed files for {}/{}#{}",
            files.len(),
            pr.owner,
            pr.repo,
            pr.number
        );
        Ok(files)
    }

    /// Fetch one page; `None` when the body is empty or not an array.
    fn fetch_page(
        &self,
        pr: &PullRequestContext,
        page: u32,
    ) -> Result<Option<Vec<Value>>, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/files",
            self.api_url, pr.owner, pr.repo, pr.number
        );
        tracing::debug!("GET {} page {}", url, page);

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", self.per_page), ("page", page)])
            .header(AUTHORIZATION, format!("token {}", pr.token))
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if status.is_client_error() || status.is_server_error() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&body).map_err(GitHubError::Json)? {
            Value::Array(entries) => Ok(Some(entries)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
