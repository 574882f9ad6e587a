//! Dependency group definitions for package.json sections

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dependency section of package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyGroup {
    /// `dependencies`
    Regular,
    /// `devDependencies`
    Dev,
    /// `peerDependencies`
    Peer,
}

impl DependencyGroup {
    /// Returns the package.json key holding this group
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyGroup::Regular => "dependencies",
            DependencyGroup::Dev => "devDependencies",
            DependencyGroup::Peer => "peerDependencies",
        }
    }

    /// Returns the title printed above the group's table
    pub fn title(&self) -> &'static str {
        match self {
            DependencyGroup::Regular => "Regular Dependencies",
            DependencyGroup::Dev => "Dev Dependencies",
            DependencyGroup::Peer => "Peer Dependencies",
        }
    }

    /// Returns the key used for this group in JSON output
    pub fn json_key(&self) -> &'static str {
        match self {
            DependencyGroup::Regular => "regular",
            DependencyGroup::Dev => "dev",
            DependencyGroup::Peer => "peer",
        }
    }

    /// Returns all groups in processing order
    pub fn all() -> &'static [DependencyGroup] {
        &[
            DependencyGroup::Regular,
            DependencyGroup::Dev,
            DependencyGroup::Peer,
        ]
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_key())
    }
}
