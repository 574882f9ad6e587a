//! Table output formatter for human-readable display
//!
//! This module provides:
//! - One boxed table per selected dependency group
//! - Current/outdated marks with colors
//! - A warning table for groups without dependencies
//! - An outdated summary by change type

use crate::domain::{DependencyGroup, DependencyRecord, VersionChange};
use crate::output::OutputFormatter;
use crate::report::{GroupReport, GroupStatus, Report};
use colored::Colorize;
use std::io::Write;

const HEADERS: [&str; 5] = ["Module Name", "Requested", "Local", "Remote", "Current?"];
const HEADERS_NO_LOCAL: [&str; 4] = ["Module Name", "Requested", "Remote", "Current?"];
const NO_DEPENDENCIES: &str = "No dependencies found in the package.json file";

/// How a table cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Header,
    Good,
    Warn,
    Bad,
}

/// A table cell with its display tone
#[derive(Debug, Clone)]
struct Cell {
    text: String,
    tone: Tone,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Header,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Mark shown in the "Current?" column
pub fn current_mark(current: bool) -> &'static str {
    match (cfg!(windows), current) {
        (true, true) => "\u{221A}",
        (true, false) => "\u{00D7}",
        (false, true) => "✓",
        (false, false) => "✖",
    }
}

/// Table formatter for human-readable output
pub struct TableFormatter {
    /// Whether the local version column is hidden
    hide_local: bool,
    /// Whether to use colors
    color: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(hide_local: bool, color: bool) -> Self {
        Self { hide_local, color }
    }

    /// Whether a record is shown as current
    fn is_current(&self, record: &DependencyRecord) -> bool {
        if self.hide_local {
            record.is_requested_current()
        } else {
            record.is_local_current()
        }
    }

    fn record_row(&self, record: &DependencyRecord) -> Vec<Cell> {
        let current = self.is_current(record);
        let mut row = vec![
            Cell::plain(&record.module_name),
            Cell::plain(&record.requested_version),
        ];
        if !self.hide_local {
            row.push(Cell::plain(&record.local_version));
        }
        row.push(Cell::plain(&record.remote_version));
        row.push(Cell {
            text: current_mark(current).to_string(),
            tone: if current { Tone::Good } else { Tone::Bad },
        });
        row
    }

    fn paint(&self, cell: &Cell) -> String {
        if !self.color {
            return cell.text.clone();
        }
        match cell.tone {
            Tone::Plain => cell.text.clone(),
            Tone::Header => cell.text.red().to_string(),
            Tone::Good => cell.text.green().to_string(),
            Tone::Warn => cell.text.yellow().to_string(),
            Tone::Bad => cell.text.red().to_string(),
        }
    }

    /// Write a horizontal border line
    fn write_border(
        &self,
        widths: &[usize],
        (left, mid, right): (char, char, char),
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        writeln!(
            writer,
            "{}{}{}",
            left,
            segments.join(&mid.to_string()),
            right
        )
    }

    fn write_row(
        &self,
        widths: &[usize],
        row: &[Cell],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        write!(writer, "│")?;
        for (cell, width) in row.iter().zip(widths) {
            let padding = " ".repeat(width - cell.width());
            write!(writer, " {}{} │", self.paint(cell), padding)?;
        }
        writeln!(writer)
    }

    /// Write a boxed table with a header row
    fn write_table(
        &self,
        headers: &[&str],
        rows: &[Vec<Cell>],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let header_row: Vec<Cell> = headers.iter().map(|h| Cell::header(*h)).collect();
        let widths: Vec<usize> = (0..headers.len())
            .map(|i| {
                rows.iter()
                    .chain(std::iter::once(&header_row))
                    .filter_map(|row| row.get(i))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        self.write_border(&widths, ('┌', '┬', '┐'), writer)?;
        self.write_row(&widths, &header_row, writer)?;
        for row in rows {
            self.write_border(&widths, ('├', '┼', '┤'), writer)?;
            self.write_row(&widths, row, writer)?;
        }
        self.write_border(&widths, ('└', '┴', '┘'), writer)
    }

    /// Format one group: blank line, title, table
    fn format_group(&self, group: &GroupReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if !group.is_enabled() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "{}", group.group.title())?;

        match &group.status {
            GroupStatus::Disabled => {}
            GroupStatus::Missing => {
                self.write_table(&["Warning"], &[vec![Cell::plain(NO_DEPENDENCIES)]], writer)?;
            }
            GroupStatus::Records(records) => {
                let rows: Vec<Vec<Cell>> = records.iter().map(|r| self.record_row(r)).collect();
                if self.hide_local {
                    self.write_table(&HEADERS_NO_LOCAL, &rows, writer)?;
                } else {
                    self.write_table(&HEADERS, &rows, writer)?;
                }
            }
        }

        Ok(())
    }

    /// Write the outdated summary line
    fn format_summary(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.hide_local {
            return Ok(());
        }

        let counts = report.outdated_counts();
        if counts.total() == 0 {
            return Ok(());
        }

        let mut parts = Vec::new();
        if counts.major > 0 {
            parts.push(self.paint_count(counts.major, VersionChange::Major.label(), Tone::Bad));
        }
        if counts.minor > 0 {
            parts.push(self.paint_count(counts.minor, VersionChange::Minor.label(), Tone::Warn));
        }
        if counts.patch > 0 {
            parts.push(self.paint_count(counts.patch, VersionChange::Patch.label(), Tone::Good));
        }
        if counts.unknown > 0 {
            parts.push(format!("{} other", counts.unknown));
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{} installed {} behind the registry ({})",
            counts.total(),
            if counts.total() == 1 {
                "dependency is"
            } else {
                "dependencies are"
            },
            parts.join(", ")
        )
    }

    fn paint_count(&self, count: usize, label: &str, tone: Tone) -> String {
        let text = format!("{} {}", count, label);
        if !self.color {
            return text;
        }
        match tone {
            Tone::Bad => text.red().bold().to_string(),
            Tone::Warn => text.yellow().to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Plain | Tone::Header => text,
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()> {
        for group in DependencyGroup::all() {
            if let Some(group_report) = report.group(*group).filter(|g| g.is_enabled()) {
                self.format_group(group_report, writer)?;
            }
        }
        self.format_summary(report, writer)
    }
}
