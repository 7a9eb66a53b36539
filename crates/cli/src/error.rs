// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::github::GitHubError;
use crate::pattern::PatternError;

/// Pathgate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid or missing input
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pattern could not be compiled
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Pull request lookup failed
    #[error("github error: {0}")]
    GitHub(#[from] GitHubError),

    /// Local git diff failed
    #[error("git error: {0}")]
    Git(String),
}

/// Result type using pathgate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Completed; a file matched (or matching was not gated on)
    Success = 0,
    /// No file matched and `--exit-code` was requested
    NoMatch = 1,
    /// Configuration, argument, or pattern error
    ConfigError = 2,
    /// Internal or environment error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) | Error::Pattern(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::GitHub(_) | Error::Git(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
