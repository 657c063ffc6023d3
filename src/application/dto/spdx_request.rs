use crate::sbom_generation::domain::SbomDocument;
use std::path::PathBuf;

/// SpdxRequest - Request DTO for SPDX document generation
#[derive(Debug, Clone)]
pub struct SpdxRequest {
    /// Results file written by a previous retrieval
    pub results_json: PathBuf,
    /// SPDX license-list-data `licenses.json`
    pub license_list: PathBuf,
    /// SPDX license-list-data `exceptions.json`
    pub exception_list: PathBuf,
}

impl SpdxRequest {
    pub fn new(results_json: PathBuf, license_list: PathBuf, exception_list: PathBuf) -> Self {
        Self {
            results_json,
            license_list,
            exception_list,
        }
    }
}

/// SpdxResponse - The assembled document, ready for a formatter
#[derive(Debug, Clone)]
pub struct SpdxResponse {
    pub document: SbomDocument,
}
