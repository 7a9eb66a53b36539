// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of the YAML-style pattern list.
//!
//! Input looks like a YAML sequence:
//!
//! ```text
//! - "src/**"
//! - '!src/generated/**'
//! - docs/*.md
//! ```
//!
//! Only lines starting with `-` are entries. Everything else (blank lines,
//! comments, stray text) is skipped, so parsing never fails.

/// A single pattern line, with list marker and one pair of quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    raw: String,
}

impl PatternEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Pattern text as written, still carrying any `!` prefix.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Parse a pattern block into entries, preserving declaration order.
pub fn parse_entries(text: &str) -> Vec<PatternEntry> {
    text.lines().filter_map(parse_line).map(PatternEntry::new).collect()
}

fn parse_line(line: &str) -> Option<&str> {
    let item = line.trim().strip_prefix('-')?;
    Some(strip_quotes(item.trim()))
}

/// Strip exactly one matching pair of surrounding quotes.
///
/// A lone quote counts as both ends, leaving an empty pattern.
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.starts_with(quote) && s.ends_with(quote) {
            return s.get(1..s.len() - 1).unwrap_or_default();
        }
    }
    s
}

/// Split a leading `!` off a pattern: `(negated, glob)`.
///
/// Whitespace around the pattern and after the `!` is ignored.
pub(crate) fn split_negation(pattern: &str) -> (bool, &str) {
    let pattern = pattern.trim();
    match pattern.strip_prefix('!') {
        Some(rest) => (true, rest.trim()),
        None => (false, pattern),
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
