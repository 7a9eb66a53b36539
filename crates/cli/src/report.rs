// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Writing a match report in the selected format.

use pathgate::cli::OutputFormat;
use pathgate::color::resolve_color;
use pathgate::output::text::TextFormatter;
use pathgate::output::{MatchReport, json};

pub fn print(format: OutputFormat, report: &MatchReport<'_>) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::stdout(resolve_color()).write_report(report)?,
        OutputFormat::Json => json::write_report(std::io::stdout().lock(), report)?,
    }
    Ok(())
}
