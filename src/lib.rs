//! dview - package.json dependency viewer library
//!
//! This library compares, for every dependency declared in a package.json:
//! - the requested version range
//! - the version installed in node_modules
//! - the latest version published to the registry
//!
//! and renders the comparison as tables or JSON, optionally rewriting the
//! manifest with the published versions.

pub mod cli;
pub mod domain;
pub mod error;
pub mod filter;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod report;
