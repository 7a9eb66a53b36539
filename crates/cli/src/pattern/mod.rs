// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation for changed-file filtering.
//!
//! A pattern block is parsed into [`PatternEntry`] values, then compiled into a
//! [`RuleSet`]: an ordered list of anchored glob matchers, each tagged as an
//! inclusion or an exclusion (`!` prefix).

pub mod entry;
pub mod matcher;

pub use entry::{PatternEntry, parse_entries};
pub use matcher::{GlobMatcher, PatternError, glob_to_regex};

use entry::split_negation;

/// A compiled glob tagged as inclusion or exclusion.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    glob: String,
    matcher: GlobMatcher,
    negated: bool,
}

impl CompiledPattern {
    /// Compile a single pattern string, handling a leading `!`.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let (negated, glob) = split_negation(pattern);
        Ok(Self {
            glob: glob.to_string(),
            matcher: GlobMatcher::compile(glob)?,
            negated,
        })
    }

    /// The glob with any `!` removed.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Check whether the pattern matches the entire path.
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

/// Ordered compiled patterns.
///
/// Order is significant: evaluation is last-match-wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    patterns: Vec<CompiledPattern>,
    has_positive: bool,
}

impl RuleSet {
    pub fn new(patterns: Vec<CompiledPattern>) -> Self {
        let has_positive = patterns.iter().any(|p| !p.is_negated());
        Self {
            patterns,
            has_positive,
        }
    }

    /// Parse and compile a pattern block in one step.
    pub fn from_text(text: &str) -> Result<Self, PatternError> {
        compile(&parse_entries(text))
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// True if at least one pattern is an inclusion.
    ///
    /// Decides the default for paths no pattern matches: excluded when
    /// inclusions exist, included otherwise.
    pub fn has_positive(&self) -> bool {
        self.has_positive
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compile parsed entries into a rule set, keeping their order.
///
/// Fails on the first pattern whose matcher cannot be built.
pub fn compile(entries: &[PatternEntry]) -> Result<RuleSet, PatternError> {
    let patterns = entries
        .iter()
        .map(|entry| CompiledPattern::compile(entry.raw()))
        .collect::<Result<Vec<_>, _>>()?;
    for pattern in &patterns {
        tracing::trace!(glob = pattern.glob(), negated = pattern.is_negated(), "compiled pattern");
    }
    tracing::debug!(
        "compiled {} patterns ({} exclusions)",
        patterns.len(),
        patterns.iter().filter(|p| p.is_negated()).count()
    );
    Ok(RuleSet::new(patterns))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
