//! Semantic version change classification between installed and published versions

use semver::Version;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChange {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch or prerelease change (fixes)
    Patch,
    /// Identical versions
    None,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChange {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (parse_version(old), parse_version(new)) {
            (Some(old), Some(new)) => {
                if old == new {
                    VersionChange::None
                } else if old.major != new.major {
                    VersionChange::Major
                } else if old.minor != new.minor {
                    VersionChange::Minor
                } else {
                    VersionChange::Patch
                }
            }
            _ => VersionChange::Unknown,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChange::Major => "major",
            VersionChange::Minor => "minor",
            VersionChange::Patch => "patch",
            VersionChange::None => "none",
            VersionChange::Unknown => "?",
        }
    }
}

fn parse_version(v: &str) -> Option<Version> {
    let v = v.trim();
    let v = v.strip_prefix('v').unwrap_or(v);
    Version::parse(v).ok()
}
