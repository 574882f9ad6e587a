//! package.json loading and dependency enumeration
//!
//! Handles the three dependency sections:
//! - dependencies
//! - devDependencies
//! - peerDependencies

use crate::domain::DependencyGroup;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed package.json file
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    root: Map<String, Value>,
}

impl ManifestDocument {
    /// Load and validate a manifest file
    ///
    /// Fails if the path does not exist, is not a regular file, or does not
    /// contain a JSON object.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();

        if !path.exists() {
            return Err(ManifestError::not_found(path));
        }

        let metadata = fs::metadata(&path).map_err(|e| ManifestError::read_error(&path, e))?;
        if !metadata.is_file() {
            return Err(ManifestError::not_a_file(path));
        }

        let content = fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
        Self::parse(path, &content)
    }

    /// Parse manifest content that was read from `path`
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ManifestError> {
        let path = path.into();
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))?;

        match value {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(ManifestError::NotAnObject { path }),
        }
    }

    /// Path the manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The node_modules directory next to the manifest
    pub fn node_modules_dir(&self) -> PathBuf {
        self.path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("node_modules")
    }

    /// Declared `(name, range)` pairs of a group, in manifest order
    ///
    /// Returns `None` when the section is absent, is not an object, or has no
    /// string entries. Non-string entries are ignored.
    pub fn dependencies(&self, group: DependencyGroup) -> Option<Vec<(String, String)>> {
        let section = self.root.get(group.manifest_key())?.as_object()?;

        let entries: Vec<(String, String)> = section
            .iter()
            .filter_map(|(name, range)| {
                range
                    .as_str()
                    .map(|range| (name.clone(), range.to_string()))
            })
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(entries)
        }
    }

    /// Set the range of a declared dependency
    ///
    /// Returns true if the stored range changed. Dependencies that are not
    /// declared in the group are left alone.
    pub fn set_version(&mut self, group: DependencyGroup, name: &str, range: &str) -> bool {
        let Some(section) = self
            .root
            .get_mut(group.manifest_key())
            .and_then(Value::as_object_mut)
        else {
            return false;
        };

        match section.get_mut(name) {
            Some(current) if current.as_str() != Some(range) => {
                *current = Value::String(range.to_string());
                true
            }
            _ => false,
        }
    }

    /// Serialize the manifest with two-space indentation and a trailing newline
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(&self.root)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the manifest back to the path it was loaded from
    pub fn save(&self) -> Result<(), ManifestError> {
        let content = self
            .to_json_string()
            .map_err(|e| ManifestError::json_parse_error(&self.path, e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| ManifestError::write_error(&self.path, e))
    }
}
