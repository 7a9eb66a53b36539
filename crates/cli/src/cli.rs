// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gate CI jobs on whether changed files match a glob pattern list
#[derive(Parser)]
#[command(name = "pathgate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PATHGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check the triggering pull request and set the action output
    Detect(DetectArgs),
    /// Match a local file list or git diff against patterns
    Match(MatchArgs),
}

#[derive(clap::Args)]
pub struct DetectArgs {
    /// Pattern list, one `- glob` per line (`!` excludes)
    #[arg(
        long,
        env = "INPUT_FILE-PATTERNS",
        value_name = "TEXT",
        allow_hyphen_values = true
    )]
    pub patterns: Option<String>,

    /// File the action output is appended to
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "FILE")]
    pub github_output: Option<PathBuf>,

    /// Output name (default: config `output.key`, else "changed")
    #[arg(long, value_name = "KEY")]
    pub output_key: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Fail on errors instead of reporting no match
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Pattern list, one `- glob` per line (`!` excludes)
    #[arg(
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        conflicts_with = "patterns_file",
        required_unless_present = "patterns_file"
    )]
    pub patterns: Option<String>,

    /// Read the pattern list from a file
    #[arg(long, value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Files to match (default: read lines from stdin)
    #[arg(value_name = "PATH", conflicts_with = "base")]
    pub files: Vec<String>,

    /// Match files changed since a git ref instead
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Exit with status 1 when no file matches
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
