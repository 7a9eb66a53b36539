// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decide whether a pull request's changed files match a glob pattern list.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod git;
pub mod github;
pub mod input;
pub mod output;
pub mod pattern;

pub use cli::{Cli, Command, DetectArgs, MatchArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use evaluate::{any_included, included_files, is_included};
pub use output::MatchReport;
pub use pattern::{CompiledPattern, PatternEntry, PatternError, RuleSet, compile, parse_entries};
