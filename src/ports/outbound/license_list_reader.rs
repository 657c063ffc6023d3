use crate::sbom_generation::domain::LicenseCatalog;
use crate::shared::Result;
use std::path::Path;

/// LicenseListReader port for loading the license catalog
///
/// Reads the SPDX license-list-data `licenses.json` and `exceptions.json`
/// files. Only identifiers (and the list version) are kept.
pub trait LicenseListReader {
    /// Loads the catalog from the two identifier lists
    ///
    /// # Errors
    /// Returns `CatalogLoadError` if either file cannot be read or decoded.
    /// No partial catalog is ever returned.
    fn read_catalog(&self, license_list: &Path, exception_list: &Path) -> Result<LicenseCatalog>;
}
