//! Manifest file handling
//!
//! This module provides functionality to:
//! - Load and validate package.json
//! - Enumerate declared dependencies per group
//! - Read installed versions from node_modules
//! - Rewrite the manifest with updated ranges

mod document;
mod local;
mod writer;

pub use document::ManifestDocument;
pub use local::installed_version;
pub use writer::{apply_updates, write_updates, WriteResult};
