use super::ExtractedLicenseRegistry;
use crate::sbom_generation::domain::{ClassifiedLicense, LicenseCatalog, NOASSERTION};
use crate::sbom_generation::policies::LicenseExpressionPolicy;

/// LicenseReconciler turns raw declared licenses into values a document can
/// carry: catalog expressions pass through, anything else is replaced by a
/// `LicenseRef-` identifier from the registry.
pub struct LicenseReconciler<'a> {
    catalog: &'a LicenseCatalog,
    registry: ExtractedLicenseRegistry,
}

impl<'a> LicenseReconciler<'a> {
    pub fn new(catalog: &'a LicenseCatalog) -> Self {
        Self {
            catalog,
            registry: ExtractedLicenseRegistry::new(),
        }
    }

    /// Reconciles one raw license string. An empty string is read as
    /// `NOASSERTION`.
    pub fn reconcile(&mut self, raw: &str) -> ClassifiedLicense {
        let license = if raw.is_empty() { NOASSERTION } else { raw };

        if LicenseExpressionPolicy::classify(license, self.catalog).is_recognized() {
            return ClassifiedLicense::Valid(license.to_string());
        }

        ClassifiedLicense::Extracted {
            license_ref: self.registry.resolve(license),
            original_text: license.to_string(),
        }
    }

    pub fn registry(&self) -> &ExtractedLicenseRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> ExtractedLicenseRegistry {
        self.registry
    }
}
