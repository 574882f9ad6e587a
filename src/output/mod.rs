//! Output formatting for comparison reports
//!
//! This module provides:
//! - Table output for human-readable display
//! - JSON output for machine processing

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

use crate::cli::OutputType;
use crate::report::Report;
use std::io::Write;

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (table, json)
    pub format: OutputType,
    /// Whether the local version column is hidden
    pub hide_local: bool,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputType::default(),
            hide_local: false,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(format: OutputType, hide_local: bool) -> Self {
        Self {
            format,
            hide_local,
            color: true,
        }
    }

    /// Set whether colors are used
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the report
    fn format(&self, report: &Report, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputType::Table => Box::new(TableFormatter::new(config.hide_local, config.color)),
        OutputType::Json => Box::new(JsonFormatter::new(config.hide_local)),
    }
}

/// Render a report into a string
pub fn render(formatter: &dyn OutputFormatter, report: &Report) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    formatter.format(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(std::io::Error::other)
}
