// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob matchers with automatic tier selection.

use regex::{Regex, RegexBuilder};

/// A compiled glob, anchored to the whole path.
///
/// All tiers accept exactly the paths the anchored regex translation would
/// accept; the cheaper tiers only skip the regex engine.
#[derive(Debug, Clone)]
pub enum GlobMatcher {
    /// Glob without wildcards: whole-string equality.
    Exact(String),
    /// `literal/**`: anything starting with the literal.
    Prefix(String),
    /// Everything else.
    Regex(Regex),
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid glob `{glob}`: {source}")]
    Compile {
        glob: String,
        #[source]
        source: regex::Error,
    },
}

impl GlobMatcher {
    /// Compile a glob into the cheapest matcher that preserves its semantics.
    ///
    /// - No wildcards -> `Exact`
    /// - Literal followed by a trailing `**` -> `Prefix`
    /// - Anything else -> `Regex`
    pub fn compile(glob: &str) -> Result<Self, PatternError> {
        if is_literal(glob) {
            return Ok(GlobMatcher::Exact(glob.to_string()));
        }

        if let Some(prefix) = glob.strip_suffix("**")
            && is_literal(prefix)
        {
            return Ok(GlobMatcher::Prefix(prefix.to_string()));
        }

        let regex = RegexBuilder::new(&glob_to_regex(glob))
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| PatternError::Compile {
                glob: glob.to_string(),
                source,
            })?;
        Ok(GlobMatcher::Regex(regex))
    }

    /// Check whether the entire path matches.
    pub fn is_match(&self, path: &str) -> bool {
        match self {
            GlobMatcher::Exact(literal) => path == literal,
            GlobMatcher::Prefix(prefix) => path.starts_with(prefix.as_str()),
            GlobMatcher::Regex(regex) => regex.is_match(path),
        }
    }
}

/// Check if a glob has no wildcard characters.
fn is_literal(glob: &str) -> bool {
    !glob.contains(['*', '?'])
}

/// Translate a glob into an anchored regex in a single forward scan.
///
/// - `**` -> `.*` (crosses `/`)
/// - `*`  -> `[^/]*`
/// - `?`  -> `[^/]`
/// - anything else is escaped and matched literally
pub fn glob_to_regex(glob: &str) -> String {
    let mut re = String::with_capacity(glob.len() * 2 + 2);
    re.push('^');

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                re.push_str(".*");
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            c => {
                let mut buf = [0u8; 4];
                re.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }

    re.push('$');
    re
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
