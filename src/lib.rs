//! npm-sbom - SBOM generation tool for npm projects
//!
//! This library retrieves the installed dependencies of an npm project from
//! the registry, reconciles their declared licenses against the SPDX License
//! List, and emits SPDX documents and per-license summaries. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSpdxUseCase::new(
//!     FileSystemReader::new(),
//!     JsonResultsStore::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SpdxRequest::new(
//!     PathBuf::from("results.json"),
//!     PathBuf::from("data/licenses.json"),
//!     PathBuf::from("data/exceptions.json"),
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = TagValueFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonResultsStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, SpdxJsonFormatter, TagValueFormatter,
    };
    pub use crate::adapters::outbound::network::{CachingRegistryClient, NpmRegistryClient};
    pub use crate::application::dto::{
        OutputFormat, ReportRequest, ReportResponse, RetrieveRequest, RetrieveResponse,
        SpdxRequest, SpdxResponse,
    };
    pub use crate::application::use_cases::{
        GenerateSpdxUseCase, RetrieveDependenciesUseCase, SummarizeLicensesUseCase,
    };
    pub use crate::ports::outbound::{
        LicenseListReader, ManifestReader, OutputPresenter, ProgressReporter, RegistryClient,
        ReportFormatter, ResultsStore, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        ClassifiedLicense, DependencyGraph, DependencyNode, LicenseCatalog, RootPackage,
        SbomDocument,
    };
    pub use crate::sbom_generation::policies::LicenseExpressionPolicy;
    pub use crate::sbom_generation::services::{
        DocumentAssembler, ExtractedLicenseRegistry, LicenseReportBuilder, PackageIdRegistry,
        RelationshipBuilder,
    };
    pub use crate::shared::Result;
}
