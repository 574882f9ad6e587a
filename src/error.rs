//! Application error types using thiserror
//!
//! Error kinds:
//! - ManifestError: Issues with the package.json file
//! - RegistryError: Issues with the registry CLI lookup
//! - OutputError: Issues writing the rendered report

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Cannot find the given package.json file: {path}")]
    NotFound { path: PathBuf },

    /// Path exists but is a directory or other non-file entry
    #[error("This is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Valid JSON whose top level is not an object
    #[error("expected a JSON object at the top level of {path}")]
    NotAnObject { path: PathBuf },
}

/// Errors related to the registry lookup
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry program could not be started
    #[error("failed to run '{program}' for '{package}': {source}")]
    SpawnFailed {
        program: String,
        package: String,
        #[source]
        source: std::io::Error,
    },

    /// The registry program exited unsuccessfully
    #[error("'{program} view {package} version' failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        package: String,
        status: String,
        stderr: String,
    },
}

/// Errors related to emitting the report
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write the report to the requested file
    #[error("failed to write output file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to render or print the report
    #[error("failed to write output: {0}")]
    Render(#[source] std::io::Error),
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new NotAFile error
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotAFile { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new SpawnFailed error
    pub fn spawn_failed(
        program: impl Into<String>,
        package: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        RegistryError::SpawnFailed {
            program: program.into(),
            package: package.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(
        program: impl Into<String>,
        package: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        RegistryError::CommandFailed {
            program: program.into(),
            package: package.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Name of the package the failed lookup was for
    pub fn package(&self) -> &str {
        match self {
            RegistryError::SpawnFailed { package, .. } => package,
            RegistryError::CommandFailed { package, .. } => package,
        }
    }
}
