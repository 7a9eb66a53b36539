// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use pathgate::cli::{Cli, MatchArgs};
use pathgate::error::{Error, ExitCode};
use pathgate::git;
use pathgate::input::{read_file_list, read_patterns_file};
use pathgate::output::MatchReport;
use pathgate::pattern::RuleSet;

use crate::report;

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let patterns = match (&args.patterns, &args.patterns_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_patterns_file(path)?,
        (None, None) => {
            return Err(Error::Argument("--patterns or --patterns-file is required".into()).into());
        }
    };
    let rules = RuleSet::from_text(&patterns).map_err(Error::from)?;

    let files = if let Some(base) = &args.base {
        let cwd = std::env::current_dir()?;
        if !git::is_git_repo(&cwd) {
            return Err(Error::Argument(format!("--base {} requires a git repository", base)).into());
        }
        git::changed_files(&cwd, base)?
    } else if !args.files.is_empty() {
        args.files.clone()
    } else {
        read_file_list(std::io::stdin().lock())?
    };

    let report = MatchReport::new(&files, &rules);
    report::print(cli.output, &report)?;

    if args.exit_code && !report.changed {
        Ok(ExitCode::NoMatch)
    } else {
        Ok(ExitCode::Success)
    }
}
