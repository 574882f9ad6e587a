//! Core domain models for dview
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency groups of package.json
//! - The per-dependency comparison record
//! - Version change classification

mod group;
mod record;
mod version_change;

pub use group::DependencyGroup;
pub use record::{range_prefix, DependencyRecord, UNKNOWN_VERSION};
pub use version_change::VersionChange;
