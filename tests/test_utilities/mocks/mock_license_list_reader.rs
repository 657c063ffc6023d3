use npm_sbom::prelude::*;
use npm_sbom::shared::error::SbomError;
use std::path::Path;

/// Mock LicenseListReader returning a fixed catalog
pub struct MockLicenseListReader {
    licenses: Vec<String>,
    exceptions: Vec<String>,
    should_fail: bool,
}

impl MockLicenseListReader {
    pub fn new(licenses: &[&str]) -> Self {
        Self {
            licenses: licenses.iter().map(|l| l.to_string()).collect(),
            exceptions: vec!["Classpath-exception-2.0".to_string()],
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            licenses: vec![],
            exceptions: vec![],
            should_fail: true,
        }
    }
}

impl LicenseListReader for MockLicenseListReader {
    fn read_catalog(&self, license_list: &Path, _exception_list: &Path) -> Result<LicenseCatalog> {
        if self.should_fail {
            return Err(SbomError::CatalogLoadError {
                path: license_list.to_path_buf(),
                details: "Mock license list failure".to_string(),
            }
            .into());
        }
        Ok(LicenseCatalog::new(
            self.licenses.clone(),
            self.exceptions.clone(),
        ))
    }
}
