// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Changed-file detection against a local git base ref.
//!
//! Uses git2 (libgit2) so no `git` binary is required.
//!
//! ## File Detection
//!
//! - Added, modified, renamed files: path from `new_file()`
//! - Deleted files: path from `old_file()` (since `new_file()` is empty)
//!
//! Paths are repository-relative with `/` separators, which is the form the
//! pull request listing uses.

use std::collections::BTreeSet;
use std::path::Path;

use git2::{Diff, Repository};

use crate::error::{Error, Result};

/// Extract file path from a diff delta.
///
/// Try `new_file` first (add, modify, rename, copy), then fall back to
/// `old_file` (delete).
fn extract_path<'a>(delta: &'a git2::DiffDelta<'a>) -> Option<&'a Path> {
    delta.new_file().path().or_else(|| delta.old_file().path())
}

fn collect_paths(diff: &Diff<'_>, files: &mut BTreeSet<String>) {
    for delta in diff.deltas() {
        if let Some(path) = extract_path(&delta) {
            files.insert(path.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// List files changed relative to a base ref, sorted and deduplicated.
///
/// Combines committed (base..HEAD), staged, and unstaged changes.
pub fn changed_files(root: &Path, base: &str) -> Result<Vec<String>> {
    let repo = Repository::discover(root).map_err(git_error("failed to open repository"))?;

    let base_tree = repo
        .revparse_single(base)
        .and_then(|obj| obj.peel_to_tree())
        .map_err(|e| Error::Git(format!("failed to resolve base ref `{}`: {}", base, e.message())))?;
    let head_tree = repo
        .head()
        .and_then(|head| head.peel_to_tree())
        .map_err(git_error("failed to get HEAD tree"))?;
    let index = repo.index().map_err(git_error("failed to get repository index"))?;

    let mut files = BTreeSet::new();

    let head_diff = repo
        .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)
        .map_err(git_error("failed to diff base..HEAD"))?;
    collect_paths(&head_diff, &mut files);

    let index_diff = repo
        .diff_tree_to_index(Some(&base_tree), Some(&index), None)
        .map_err(git_error("failed to diff staged changes"))?;
    collect_paths(&index_diff, &mut files);

    let workdir_diff = repo
        .diff_index_to_workdir(Some(&index), None)
        .map_err(git_error("failed to diff working tree"))?;
    collect_paths(&workdir_diff, &mut files);

    tracing::debug!("{} files changed since {}", files.len(), base);
    Ok(files.into_iter().collect())
}

fn git_error(context: &'static str) -> impl Fn(git2::Error) -> Error {
    move |e| Error::Git(format!("{}: {}", context, e.message()))
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
