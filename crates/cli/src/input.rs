// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading pattern blocks and file lists supplied by the user.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a newline-delimited file list. Blank lines are skipped.
pub fn read_file_list(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            files.push(trimmed.to_string());
        }
    }
    Ok(files)
}

/// Read a pattern block from a file.
pub fn read_patterns_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
