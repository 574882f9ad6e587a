//! Comparison report assembled from all dependency groups

use crate::domain::{DependencyGroup, DependencyRecord, VersionChange};

/// Outcome of processing one dependency group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    /// The group was not selected
    Disabled,
    /// The group was selected but the manifest declares nothing in it
    Missing,
    /// Resolved records in manifest order
    Records(Vec<DependencyRecord>),
}

/// Report for a single dependency group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    /// The dependency group
    pub group: DependencyGroup,
    /// What was found for it
    pub status: GroupStatus,
}

impl GroupReport {
    /// Returns the resolved records, empty unless the status is `Records`
    pub fn records(&self) -> &[DependencyRecord] {
        match &self.status {
            GroupStatus::Records(records) => records,
            _ => &[],
        }
    }

    /// Returns true if the group was selected
    pub fn is_enabled(&self) -> bool {
        self.status != GroupStatus::Disabled
    }
}

/// Outdated dependency counts by change type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutdatedCounts {
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
    pub unknown: usize,
}

impl OutdatedCounts {
    /// Total number of outdated dependencies
    pub fn total(&self) -> usize {
        self.major + self.minor + self.patch + self.unknown
    }
}

/// Report over all dependency groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Group reports in processing order
    pub groups: Vec<GroupReport>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group report
    pub fn push(&mut self, group: DependencyGroup, status: GroupStatus) {
        self.groups.push(GroupReport { group, status });
    }

    /// Get the report for a group
    pub fn group(&self, group: DependencyGroup) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.group == group)
    }

    /// Iterate over all resolved records with their group
    pub fn records(&self) -> impl Iterator<Item = (DependencyGroup, &DependencyRecord)> {
        self.groups
            .iter()
            .flat_map(|g| g.records().iter().map(move |r| (g.group, r)))
    }

    /// Total number of resolved records
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|g| g.records().len()).sum()
    }

    /// Keep only the records matching the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&DependencyRecord) -> bool) {
        for group in &mut self.groups {
            if let GroupStatus::Records(records) = &mut group.status {
                records.retain(|r| keep(r));
            }
        }
    }

    /// Count installed dependencies that are behind the published version
    pub fn outdated_counts(&self) -> OutdatedCounts {
        let mut counts = OutdatedCounts::default();

        for (_, record) in self.records() {
            if !record.has_local() || !record.has_remote() || record.is_local_current() {
                continue;
            }
            match VersionChange::from_versions(&record.local_version, &record.remote_version) {
                VersionChange::Major => counts.major += 1,
                VersionChange::Minor => counts.minor += 1,
                VersionChange::Patch => counts.patch += 1,
                VersionChange::None => {}
                VersionChange::Unknown => counts.unknown += 1,
            }
        }

        counts
    }
}
