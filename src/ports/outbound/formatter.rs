use crate::sbom_generation::domain::SbomDocument;
use crate::sbom_generation::services::LicenseReport;
use crate::shared::Result;

/// SbomFormatter port for formatting SBOM output
///
/// This port abstracts the rendering of an assembled document into a
/// textual encoding (SPDX tag-value, SPDX JSON).
pub trait SbomFormatter {
    /// Formats the document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SbomDocument) -> Result<String>;
}

/// ReportFormatter port for rendering the per-license summary
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &LicenseReport) -> Result<String>;
}
