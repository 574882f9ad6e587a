//! Integration tests for dview
//!
//! These tests verify:
//! - Installed version resolution from node_modules next to the manifest
//! - The load → resolve → update → filter → render pipeline
//! - Manifest rewriting keeps unrelated content and key order

use async_trait::async_trait;
use dview::domain::{DependencyGroup, UNKNOWN_VERSION};
use dview::error::RegistryError;
use dview::manifest::{write_updates, ManifestDocument};
use dview::orchestrator::Orchestrator;
use dview::output::{create_formatter, render, OutputConfig};
use dview::registry::RegistryLookup;
use dview::report::GroupStatus;
use dview::{cli::OutputType, filter::ReportFilter};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Registry answering from a fixed table
struct StaticRegistry(HashMap<&'static str, &'static str>);

#[async_trait]
impl RegistryLookup for StaticRegistry {
    fn registry_name(&self) -> &str {
        "static"
    }

    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError> {
        Ok(self.0.get(package).map(|v| v.to_string()))
    }
}

fn registry() -> Box<dyn RegistryLookup> {
    Box::new(StaticRegistry(HashMap::from([
        ("lodash", "4.17.21"),
        ("express", "4.19.2"),
        ("typescript", "5.4.2"),
        ("@types/node", "20.11.0"),
    ])))
}

/// Create a project with a package.json and some installed packages
fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let package_json = r#"{
  "name": "test-project",
  "version": "1.0.0",
  "dependencies": {
    "lodash": "^4.17.20",
    "express": "~4.18.2",
    "forked": "git+https://github.com/me/forked.git"
  },
  "devDependencies": {
    "typescript": ">=5.0.0",
    "@types/node": "^20.0.0"
  }
}"#;
    let path = temp_dir.path().join("package.json");
    fs::write(&path, package_json).unwrap();

    install(temp_dir.path(), "lodash", "4.17.21");
    install(temp_dir.path(), "express", "4.18.2");
    install(temp_dir.path(), "forked", "0.3.0");
    install(temp_dir.path(), "@types/node", "20.10.0");

    (temp_dir, path)
}

fn install(project: &Path, name: &str, version: &str) {
    let dir = project.join("node_modules").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("package.json"),
        format!(r#"{{"name": "{}", "version": "{}"}}"#, name, version),
    )
    .unwrap();
}

mod resolution {
    use super::*;

    #[tokio::test]
    async fn test_local_and_remote_versions() {
        let (_dir, path) = create_test_project();
        let document = ManifestDocument::load(&path).unwrap();

        let orchestrator = Orchestrator::with_registry(DependencyGroup::all().to_vec(), registry());
        let report = orchestrator.run(&document).await.unwrap();

        let regular = report.group(DependencyGroup::Regular).unwrap().records();
        assert_eq!(regular.len(), 3);

        assert_eq!(regular[0].module_name, "lodash");
        assert_eq!(regular[0].local_version, "4.17.21");
        assert_eq!(regular[0].remote_version, "4.17.21");

        assert_eq!(regular[1].local_version, "4.18.2");
        assert_eq!(regular[1].remote_version, "4.19.2");

        // URL dependency: installed version found, no registry lookup
        assert_eq!(regular[2].local_version, "0.3.0");
        assert_eq!(regular[2].remote_version, UNKNOWN_VERSION);

        let dev = report.group(DependencyGroup::Dev).unwrap().records();
        assert_eq!(dev[0].local_version, UNKNOWN_VERSION);
        assert_eq!(dev[0].requested_prefix, ">=");
        assert_eq!(dev[1].module_name, "@types/node");
        assert_eq!(dev[1].local_version, "20.10.0");

        assert_eq!(
            report.group(DependencyGroup::Peer).unwrap().status,
            GroupStatus::Missing
        );
    }
}

mod pipeline {
    use super::*;

    #[tokio::test]
    async fn test_update_rewrites_ranges() {
        let (_dir, path) = create_test_project();
        let mut document = ManifestDocument::load(&path).unwrap();

        let orchestrator = Orchestrator::with_registry(DependencyGroup::all().to_vec(), registry());
        let report = orchestrator.run(&document).await.unwrap();
        let result = write_updates(&mut document, &report).unwrap();
        assert_eq!(result.updates_applied, 4);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"lodash\": \"^4.17.21\""));
        assert!(content.contains("\"express\": \"~4.19.2\""));
        assert!(content.contains("\"typescript\": \">=5.4.2\""));
        assert!(content.contains("\"@types/node\": \"^20.11.0\""));
        assert!(content.contains("\"forked\": \"git+https://github.com/me/forked.git\""));

        // Key order of the original document is kept
        let name_pos = content.find("\"name\"").unwrap();
        let deps_pos = content.find("\"dependencies\"").unwrap();
        let dev_pos = content.find("\"devDependencies\"").unwrap();
        assert!(name_pos < deps_pos && deps_pos < dev_pos);
    }

    #[tokio::test]
    async fn test_exclude_current_then_render_json() {
        let (_dir, path) = create_test_project();
        let document = ManifestDocument::load(&path).unwrap();

        let orchestrator =
            Orchestrator::with_registry(vec![DependencyGroup::Regular], registry());
        let mut report = orchestrator.run(&document).await.unwrap();
        ReportFilter::new()
            .with_exclude_current(true)
            .apply(&mut report);

        let formatter = create_formatter(OutputConfig::new(OutputType::Json, false));
        let rendered = render(formatter.as_ref(), &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let names: Vec<_> = value["regular"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["moduleName"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["express", "forked"]);
        assert_eq!(value["dev"], serde_json::json!([]));
        assert_eq!(value["peer"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_render_tables() {
        let (_dir, path) = create_test_project();
        let document = ManifestDocument::load(&path).unwrap();

        let orchestrator = Orchestrator::with_registry(DependencyGroup::all().to_vec(), registry());
        let report = orchestrator.run(&document).await.unwrap();

        let formatter = create_formatter(OutputConfig::default().with_color(false));
        let rendered = render(formatter.as_ref(), &report).unwrap();

        assert_eq!(rendered.matches("Module Name").count(), 2);
        assert_eq!(rendered.matches("Warning").count(), 1);
        assert!(rendered.contains("Regular Dependencies"));
        assert!(rendered.contains("Dev Dependencies"));
        assert!(rendered.contains("Peer Dependencies"));
        assert!(rendered.contains("behind the registry"));
    }
}
