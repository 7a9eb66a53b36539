// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Detect command implementation.
//!
//! Failures are non-fatal unless `--strict` is given: the error is reported,
//! the output is set to `false`, and the process exits successfully so a
//! filter problem never blocks unrelated jobs.

use pathgate::cli::{Cli, DetectArgs};
use pathgate::config::{self, Config};
use pathgate::error::{Error, ExitCode};
use pathgate::github::{ActionEnv, DEFAULT_API_URL, GitHubClient};
use pathgate::output::{self, DEFAULT_OUTPUT_KEY, MatchReport};
use pathgate::pattern::RuleSet;

use crate::report;

/// Run the detect command.
pub fn run(cli: &Cli, args: &DetectArgs) -> anyhow::Result<ExitCode> {
    let config = load_config(cli);
    let key = args
        .output_key
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.output.key.clone()))
        .unwrap_or_else(|| DEFAULT_OUTPUT_KEY.to_string());

    let result = config.and_then(|config| detect(cli, args, &config, &key));

    match result {
        Ok(()) => Ok(ExitCode::Success),
        Err(err) if args.strict => Err(err),
        Err(err) => {
            eprintln!("pathgate: error: {:#}", err);
            if let Some(path) = &args.github_output
                && output::validate_key(&key).is_ok()
                && let Err(write_err) = output::append_output(path, &key, false)
            {
                eprintln!("pathgate: error: {}", write_err);
            }
            Ok(ExitCode::Success)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    match config::find(cli.config.as_deref(), &cwd) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load_with_warnings(&path)?)
        }
        None => Ok(Config::default()),
    }
}

fn detect(cli: &Cli, args: &DetectArgs, config: &Config, key: &str) -> anyhow::Result<()> {
    output::validate_key(key)
        .map_err(|reason| Error::Argument(format!("invalid output key `{}`: {}", key, reason)))?;

    let patterns = args
        .patterns
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| Error::Argument("input required and not supplied: file-patterns".into()))?;
    let output_path = args
        .github_output
        .as_deref()
        .ok_or_else(|| Error::Argument("GITHUB_OUTPUT is not set".into()))?;

    let rules = RuleSet::from_text(patterns).map_err(Error::from)?;

    let files = match ActionEnv::from_env().pull_request().map_err(Error::from)? {
        Some(pr) => {
            let api_url = args
                .api_url
                .as_deref()
                .or(config.github.api_url.as_deref())
                .unwrap_or(DEFAULT_API_URL);
            let client = GitHubClient::new(&config.github, api_url).map_err(Error::from)?;
            client.pull_request_files(&pr).map_err(Error::from)?
        }
        None => {
            tracing::info!("no pull request context; treating change list as empty");
            Vec::new()
        }
    };

    let report = MatchReport::new(&files, &rules);
    report::print(cli.output, &report)?;
    output::append_output(output_path, key, report.changed)?;
    Ok(())
}
