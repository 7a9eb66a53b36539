// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.

use std::io::Write;

use super::MatchReport;

/// Write the report as a pretty-printed JSON object followed by a newline.
pub fn write_report(mut out: impl Write, report: &MatchReport<'_>) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
