//! Report filter configuration
//!
//! This module provides the ReportFilter struct that encapsulates
//! the display and exclusion options applied after resolution.

use crate::domain::DependencyRecord;
use crate::report::Report;

/// Filter configuration for the rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Hide the installed version column
    pub hide_local: bool,
    /// Drop dependencies that are already current
    pub exclude_current: bool,
}

impl ReportFilter {
    /// Create a new ReportFilter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the local column is hidden
    pub fn with_hide_local(mut self, hide_local: bool) -> Self {
        self.hide_local = hide_local;
        self
    }

    /// Set whether current dependencies are dropped
    pub fn with_exclude_current(mut self, exclude_current: bool) -> Self {
        self.exclude_current = exclude_current;
        self
    }

    /// Check whether a record counts as current
    ///
    /// With the local column visible, the installed version must equal the
    /// published one. With it hidden, the requested version (without its
    /// range operator) must equal the published one.
    pub fn is_current(&self, record: &DependencyRecord) -> bool {
        if self.hide_local {
            record.is_requested_current()
        } else {
            record.is_local_current()
        }
    }

    /// Apply the exclusion policy to a report
    pub fn apply(&self, report: &mut Report) {
        if self.exclude_current {
            report.retain(|record| !self.is_current(record));
        }
    }
}
