//! Per-dependency comparison record

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Placeholder shown when a local or remote version could not be determined
pub const UNKNOWN_VERSION: &str = "???";

/// Leading range operators of a requested version (`^`, `~`, `>=`, `>`, `=`)
static RANGE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:~|\^|>=|>|=)*").expect("range prefix pattern is valid")
});

/// Comparison of one declared dependency against its installed and published versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    /// Package name as declared in the manifest
    pub module_name: String,
    /// Range expression as declared in the manifest
    pub requested_version: String,
    /// Range operator of the requested version, empty for exact versions
    pub requested_prefix: String,
    /// Installed version from node_modules, or [`UNKNOWN_VERSION`]
    pub local_version: String,
    /// Latest published version, or [`UNKNOWN_VERSION`]
    pub remote_version: String,
}

impl DependencyRecord {
    /// Creates a record with both versions still unresolved
    pub fn new(module_name: impl Into<String>, requested_version: impl Into<String>) -> Self {
        let requested_version = requested_version.into();
        let requested_prefix = range_prefix(&requested_version).to_string();
        Self {
            module_name: module_name.into(),
            requested_version,
            requested_prefix,
            local_version: UNKNOWN_VERSION.to_string(),
            remote_version: UNKNOWN_VERSION.to_string(),
        }
    }

    /// Returns true if the requested version points at a URL, git repo or path.
    ///
    /// Such dependencies have no registry entry, so no remote lookup is made.
    pub fn is_url_reference(&self) -> bool {
        self.requested_version.contains('/')
    }

    /// Returns true if a local version was found
    pub fn has_local(&self) -> bool {
        self.local_version != UNKNOWN_VERSION
    }

    /// Returns true if a remote version was found
    pub fn has_remote(&self) -> bool {
        self.remote_version != UNKNOWN_VERSION
    }

    /// The requested version with its range operator removed
    pub fn requested_bare(&self) -> &str {
        let trimmed = self.requested_version.trim();
        trimmed[self.requested_prefix.len()..].trim_start()
    }

    /// The range to write back on update: prefix plus remote version
    pub fn updated_range(&self) -> Option<String> {
        if self.has_remote() {
            Some(format!("{}{}", self.requested_prefix, self.remote_version))
        } else {
            None
        }
    }

    /// Returns true if the installed version matches the published one
    pub fn is_local_current(&self) -> bool {
        self.local_version == self.remote_version
    }

    /// Returns true if the requested version pins the published one
    pub fn is_requested_current(&self) -> bool {
        self.requested_bare() == self.remote_version
    }
}

/// Extracts the leading range operators of a requested version
pub fn range_prefix(requested: &str) -> &str {
    let trimmed = requested.trim();
    RANGE_PREFIX
        .find(trimmed)
        .map(|m| m.as_str())
        .unwrap_or_default()
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} (local {}, remote {})",
            self.module_name, self.requested_version, self.local_version, self.remote_version
        )
    }
}
