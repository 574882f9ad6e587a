//! Orchestrator for coordinating the comparison workflow
//!
//! This module provides:
//! - Workflow coordination: enumerate → resolve local → resolve remote → report
//! - Concurrent lookups within a dependency group
//! - Abort on the first failed registry lookup

use crate::cli::CliArgs;
use crate::domain::{DependencyGroup, DependencyRecord};
use crate::error::RegistryError;
use crate::manifest::{installed_version, ManifestDocument};
use crate::progress::LookupProgress;
use crate::registry::{NpmCli, RegistryLookup};
use crate::report::{GroupStatus, Report};
use futures::future::try_join_all;
use std::path::Path;
use tracing::{debug, info};

/// Orchestrator for coordinating the comparison workflow
pub struct Orchestrator {
    /// Groups to process, in processing order
    groups: Vec<DependencyGroup>,
    /// Registry used for remote version lookups
    registry: Box<dyn RegistryLookup>,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI arguments
    pub fn new(args: &CliArgs) -> Self {
        Self {
            groups: args.selected_groups(),
            registry: Box::new(NpmCli::with_program(&args.npm)),
            show_progress: !args.verbose,
        }
    }

    /// Create an orchestrator with a custom registry (for testing)
    pub fn with_registry(groups: Vec<DependencyGroup>, registry: Box<dyn RegistryLookup>) -> Self {
        Self {
            groups,
            registry,
            show_progress: false,
        }
    }

    /// Run the comparison for every group of the manifest
    ///
    /// Groups that were not selected are reported as `Disabled`. The first
    /// failed registry lookup aborts the run.
    pub async fn run(&self, document: &ManifestDocument) -> Result<Report, RegistryError> {
        let node_modules = document.node_modules_dir();

        let total: usize = self
            .groups
            .iter()
            .filter_map(|g| document.dependencies(*g))
            .map(|deps| deps.len())
            .sum();
        let progress = LookupProgress::new(total as u64, self.show_progress);

        let mut report = Report::new();
        for group in DependencyGroup::all().iter().copied() {
            if !self.groups.contains(&group) {
                report.push(group, GroupStatus::Disabled);
                continue;
            }

            let Some(declared) = document.dependencies(group) else {
                info!("no {} found in {}", group, document.path().display());
                report.push(group, GroupStatus::Missing);
                continue;
            };

            progress.begin_group(group, declared.len());
            let records = declared
                .into_iter()
                .map(|(name, range)| DependencyRecord::new(name, range))
                .map(|record| self.resolve(&node_modules, record, &progress));

            let resolved = try_join_all(records).await?;
            report.push(group, GroupStatus::Records(resolved));
        }
        debug!("resolved {} dependencies", progress.completed());

        Ok(report)
    }

    /// Fill in the local and remote versions of a record
    async fn resolve(
        &self,
        node_modules: &Path,
        mut record: DependencyRecord,
        progress: &LookupProgress,
    ) -> Result<DependencyRecord, RegistryError> {
        if let Some(version) = installed_version(node_modules, &record.module_name).await {
            record.local_version = version;
        }

        if record.is_url_reference() {
            debug!(
                "{} requests {}, skipping {} lookup",
                record.module_name,
                record.requested_version,
                self.registry.registry_name()
            );
        } else if let Some(version) = self.registry.latest_version(&record.module_name).await? {
            record.remote_version = version;
        }

        progress.lookup_done();
        Ok(record)
    }
}
