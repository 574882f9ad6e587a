//! Installed package version lookup in node_modules

use serde::Deserialize;
use std::path::Path;
use tracing::trace;

/// The only field read from an installed package's package.json
#[derive(Debug, Deserialize)]
struct InstalledPackage {
    version: Option<String>,
}

/// Read the version of an installed package
///
/// Looks at `<node_modules>/<name>/package.json`. Any failure (missing
/// directory, unreadable file, invalid JSON, missing version) yields `None`.
pub async fn installed_version(node_modules: &Path, name: &str) -> Option<String> {
    let path = node_modules.join(name).join("package.json");

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            trace!("no installed manifest at {}: {}", path.display(), e);
            return None;
        }
    };

    serde_json::from_str::<InstalledPackage>(&content)
        .ok()
        .and_then(|pkg| pkg.version)
}
