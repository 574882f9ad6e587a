//! Registry lookups for the latest published version of a package
//!
//! This module provides:
//! - The RegistryLookup trait used by the orchestrator
//! - An npm CLI backed implementation

mod npm;

pub use npm::{NpmCli, DEFAULT_NPM_PROGRAM};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for looking up the latest published version of a package
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &str;

    /// Fetch the latest published version, `None` if the registry reports none
    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError>;
}
