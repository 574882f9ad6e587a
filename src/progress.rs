//! Progress display for dependency lookups
//!
//! The bar draws to stderr through indicatif, which keeps it hidden when
//! stderr is not a terminal.

use crate::domain::DependencyGroup;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress over every registry lookup of a run
pub struct LookupProgress {
    bar: ProgressBar,
}

impl LookupProgress {
    /// Create a bar for `total` lookups; hidden when disabled or empty
    pub fn new(total: u64, enabled: bool) -> Self {
        if !enabled || total == 0 {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
                .expect("Invalid template")
                .progress_chars("█▓▒░"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A progress reporter that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Announce the group whose lookups are starting
    pub fn begin_group(&self, group: DependencyGroup, count: usize) {
        self.bar.set_message(format!("{} ({})", group.title(), count));
    }

    /// Record one finished lookup
    pub fn lookup_done(&self) {
        self.bar.inc(1);
    }

    /// Number of finished lookups
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }
}

impl Drop for LookupProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
