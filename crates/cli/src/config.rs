// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles pathgate.toml parsing with version validation and unknown key
//! warnings. Every setting has a default, so the file is optional.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::github::MAX_PER_PAGE;
use crate::output::{DEFAULT_OUTPUT_KEY, validate_key};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pathgate.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "github", "output"];

/// Known `[github]` keys.
const KNOWN_GITHUB_KEYS: &[&str] = &["api_url", "per_page", "user_agent", "timeout_secs"];

/// Known `[output]` keys.
const KNOWN_OUTPUT_KEYS: &[&str] = &["key"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Pull request file listing.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Action output.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            github: GitHubConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// GitHub REST API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API base URL (default: `GITHUB_API_URL`, then https://api.github.com).
    pub api_url: Option<String>,

    /// Files per page, 1 to 100 (default: 100).
    pub per_page: u32,

    /// User-Agent header (default: "pathgate").
    pub user_agent: String,

    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            per_page: MAX_PER_PAGE,
            user_agent: "pathgate".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Action output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output name written to `GITHUB_OUTPUT` (default: "changed").
    pub key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_OUTPUT_KEY.to_string(),
        }
    }
}

/// Pick the config file: an explicit path, else `pathgate.toml` in `cwd` if present.
pub fn find(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade pathgate to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let config: Config = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    validate(&config).map_err(config_error)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    if let Ok(table) = content.parse::<toml::Table>() {
        for key in unknown_keys(&table) {
            warn_unknown_key(path, &key);
        }
    }

    Ok(config)
}

fn validate(config: &Config) -> std::result::Result<(), String> {
    let github = &config.github;
    if !(1..=MAX_PER_PAGE).contains(&github.per_page) {
        return Err(format!(
            "github.per_page must be between 1 and {}, got {}",
            MAX_PER_PAGE, github.per_page
        ));
    }
    if github.timeout_secs == 0 {
        return Err("github.timeout_secs must be greater than 0".to_string());
    }
    if github.user_agent.trim().is_empty() {
        return Err("github.user_agent must not be empty".to_string());
    }
    validate_key(&config.output.key).map_err(|e| format!("output.key: {e}"))
}

/// Collect unrecognized keys, dotted for nested tables.
fn unknown_keys(table: &toml::Table) -> BTreeSet<String> {
    let mut unknown = BTreeSet::new();

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.insert(key.clone());
            continue;
        }

        let known_nested = match key.as_str() {
            "github" => KNOWN_GITHUB_KEYS,
            "output" => KNOWN_OUTPUT_KEYS,
            _ => continue,
        };
        if let toml::Value::Table(nested) = value {
            for nested_key in nested.keys() {
                if !known_nested.contains(&nested_key.as_str()) {
                    unknown.insert(format!("{key}.{nested_key}"));
                }
            }
        }
    }

    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "pathgate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
