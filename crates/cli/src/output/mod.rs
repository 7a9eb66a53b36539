// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match results: the action output file and human/JSON reports.

pub mod json;
pub mod text;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::evaluate::{any_included, included_files};
use crate::pattern::RuleSet;

/// Output name used when none is configured.
pub const DEFAULT_OUTPUT_KEY: &str = "changed";

/// Outcome of matching a file list against a rule set.
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    /// True if any file is included.
    pub changed: bool,
    /// Every candidate file, in input order.
    pub files: Vec<&'a str>,
    /// The included subset, in input order.
    pub included: Vec<&'a str>,
}

impl<'a> MatchReport<'a> {
    pub fn new<S: AsRef<str>>(files: &'a [S], rules: &RuleSet) -> Self {
        Self {
            changed: any_included(files, rules),
            files: files.iter().map(|f| f.as_ref()).collect(),
            included: included_files(files, rules),
        }
    }
}

/// Check that a key can be written as a single `key=value` line.
pub fn validate_key(key: &str) -> std::result::Result<(), &'static str> {
    if key.trim().is_empty() {
        return Err("must not be empty");
    }
    if key.contains('=') {
        return Err("must not contain '='");
    }
    if key.contains(['\n', '\r']) {
        return Err("must not contain line breaks");
    }
    Ok(())
}

/// Append `key=true|false` to the action output file, creating it if needed.
pub fn append_output(path: &Path, key: &str, changed: bool) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    writeln!(file, "{key}={changed}").map_err(io_error)?;

    tracing::debug!("wrote {}={} to {}", key, changed, path.display());
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
