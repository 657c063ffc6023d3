use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish argument mistakes from
/// failures that happened while producing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested output was written
    Success = 0,
    /// Application error (catalog, graph, network, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to load SPDX license list: {path}\nDetails: {details}\n\n💡 Hint: Download licenses.json and exceptions.json from the spdx/license-list-data repository and pass them with --license-list / --exception-list")]
    CatalogLoadError { path: PathBuf, details: String },

    #[error("Inconsistent dependency graph: {details}\n\n💡 Hint: Re-run 'retrieve' to regenerate the results file")]
    GraphIntegrityError { details: String },

    #[error("{kind} not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound {
        kind: String,
        path: PathBuf,
        suggestion: String,
    },

    #[error("Failed to parse {kind}: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is valid JSON produced by npm")]
    ManifestParseError {
        kind: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to fetch registry data for {package_name}@{version}\nDetails: {details}\n\n💡 Hint: Check your internet connection and the --registry-url setting")]
    RegistryFetchError {
        package_name: String,
        version: String,
        details: String,
    },

    #[error("Failed to load results file: {path}\nDetails: {details}\n\n💡 Hint: Run 'retrieve' first to produce a results file")]
    ResultsLoadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
