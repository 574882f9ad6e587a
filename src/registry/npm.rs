//! npm CLI registry lookup
//!
//! Runs `npm view <package> version` and reads the version from stdout.

use crate::error::RegistryError;
use crate::registry::RegistryLookup;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Program used when no other registry CLI is configured
pub const DEFAULT_NPM_PROGRAM: &str = "npm";

/// Registry lookup that shells out to the npm CLI
#[derive(Debug, Clone)]
pub struct NpmCli {
    program: String,
}

impl NpmCli {
    /// Create a lookup using the default `npm` program
    pub fn new() -> Self {
        Self::with_program(DEFAULT_NPM_PROGRAM)
    }

    /// Create a lookup using a custom program path
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this lookup runs
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command for a package
    fn build_command(&self, package: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("view")
            .arg(package)
            .arg("version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the version from `npm view` output, `None` if it printed nothing
fn parse_view_output(stdout: &str) -> Option<String> {
    let version = stdout.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

#[async_trait]
impl RegistryLookup for NpmCli {
    fn registry_name(&self) -> &str {
        "npm"
    }

    async fn latest_version(&self, package: &str) -> Result<Option<String>, RegistryError> {
        debug!("{} view {} version", self.program, package);

        let output = self
            .build_command(package)
            .output()
            .await
            .map_err(|e| RegistryError::spawn_failed(&self.program, package, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RegistryError::command_failed(
                &self.program,
                package,
                output.status.to_string(),
                stderr,
            ));
        }

        Ok(parse_view_output(&String::from_utf8_lossy(&output.stdout)))
    }
}
