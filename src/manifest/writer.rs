//! Manifest rewrite with remote version ranges
//!
//! This module provides:
//! - Applying `prefix + remote` ranges from a report to the manifest
//! - Persisting the rewritten manifest in place

use crate::error::ManifestError;
use crate::manifest::ManifestDocument;
use crate::report::Report;
use std::path::PathBuf;
use tracing::debug;

/// Result of rewriting a manifest file
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Number of dependency ranges that changed
    pub updates_applied: usize,
}

impl WriteResult {
    /// Returns true if any range changed
    pub fn has_updates(&self) -> bool {
        self.updates_applied > 0
    }
}

/// Set every resolved dependency's range to its prefix plus the remote version
///
/// Records without a remote version are left untouched. Returns the number of
/// ranges that changed.
pub fn apply_updates(document: &mut ManifestDocument, report: &Report) -> usize {
    let mut applied = 0;

    for (group, record) in report.records() {
        let Some(range) = record.updated_range() else {
            continue;
        };
        if document.set_version(group, &record.module_name, &range) {
            debug!(
                "{} {}: {} -> {}",
                group, record.module_name, record.requested_version, range
            );
            applied += 1;
        }
    }

    applied
}

/// Apply updates from the report and write the manifest back to disk
pub fn write_updates(
    document: &mut ManifestDocument,
    report: &Report,
) -> Result<WriteResult, ManifestError> {
    let updates_applied = apply_updates(document, report);
    document.save()?;

    Ok(WriteResult {
        path: document.path().to_path_buf(),
        updates_applied,
    })
}
