//! Text output formatter for human-readable display
//!
//! Output is streamed: the orchestrator writes each row as soon as the
//! dependency has been checked.

use crate::domain::{CheckResult, DependencyGroup};
use crate::output::{center, rule, table_row, BANNER_WIDTH};
use colored::Colorize;
use std::io::Write;

/// Text formatter for the outdated report
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Write the registry line printed before any group
    pub fn write_registry(&self, registry: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "request package info from: {}", registry)?;
        writeln!(writer)
    }

    /// Write the banner, rules and column header of a group
    pub fn write_group_header(
        &self,
        group: DependencyGroup,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", center(group.title(), BANNER_WIDTH))?;
        writeln!(writer, "{}", rule(BANNER_WIDTH))?;
        writeln!(writer, "{}", table_row("name", "version", "latest"))?;
        writeln!(writer, "{}", rule(BANNER_WIDTH))
    }

    /// Write one dependency row, highlighted when outdated
    pub fn write_row(&self, result: &CheckResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let line = table_row(&result.name, &result.declared, result.latest_display());

        if self.color && result.is_outdated() {
            writeln!(writer, "{}", line.yellow())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Write the blank line closing a group
    pub fn write_group_footer(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)
    }

    /// Write an error message in the error color
    pub fn write_error(&self, message: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", message.red())
        } else {
            writeln!(writer, "{}", message)
        }
    }
}
