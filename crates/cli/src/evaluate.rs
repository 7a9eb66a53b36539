// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inclusion decisions over a compiled [`RuleSet`].
//!
//! A path starts out included only when the rule set has no inclusion
//! patterns. Every pattern that matches then overwrites the decision, in
//! declaration order, so the last matching pattern wins.

use crate::pattern::RuleSet;

/// Decide whether a single path is included.
pub fn is_included(path: &str, rules: &RuleSet) -> bool {
    rules
        .patterns()
        .iter()
        .fold(!rules.has_positive(), |included, pattern| {
            if pattern.is_match(path) {
                !pattern.is_negated()
            } else {
                included
            }
        })
}

/// True if at least one path is included. Empty input is never included.
pub fn any_included<S: AsRef<str>>(files: &[S], rules: &RuleSet) -> bool {
    files.iter().any(|f| is_included(f.as_ref(), rules))
}

/// The included paths, in input order.
pub fn included_files<'a, S: AsRef<str>>(files: &'a [S], rules: &RuleSet) -> Vec<&'a str> {
    files
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| is_included(f, rules))
        .collect()
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
