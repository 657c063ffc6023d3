use crate::sbom_generation::services::LicenseReport;
use std::path::PathBuf;

/// ReportRequest - Request DTO for the license summary
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub results_json: PathBuf,
    pub license_list: PathBuf,
    pub exception_list: PathBuf,
}

impl ReportRequest {
    pub fn new(results_json: PathBuf, license_list: PathBuf, exception_list: PathBuf) -> Self {
        Self {
            results_json,
            license_list,
            exception_list,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub report: LicenseReport,
}
