// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! Changed files (3):
//! - src/a.go
//! - src/generated/x.go
//! - docs/readme.md
//! Included files (1):
//! - src/a.go
//! Files match filter: true
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::MatchReport;
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_report(&mut self, report: &MatchReport<'_>) -> std::io::Result<()> {
        self.write_file_list("Changed files", &report.files)?;
        if !report.files.is_empty() {
            self.write_file_list("Included files", &report.included)?;
        }

        write!(self.out, "Files match filter: ")?;
        let verdict = if report.changed {
            scheme::changed()
        } else {
            scheme::unchanged()
        };
        self.out.set_color(&verdict)?;
        write!(self.out, "{}", report.changed)?;
        self.out.reset()?;
        writeln!(self.out)?;

        self.out.flush()
    }

    fn write_file_list(&mut self, title: &str, files: &[&str]) -> std::io::Result<()> {
        self.out.set_color(&scheme::header())?;
        write!(self.out, "{}", title)?;
        self.out.reset()?;
        writeln!(self.out, " ({}):", files.len())?;

        for file in files {
            write!(self.out, "- ")?;
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", file)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
