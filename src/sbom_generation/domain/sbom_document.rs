use super::{CreationInfo, ExtractedLicenseEntry, Package, RelationshipRecord, SpdxId};

/// Placeholder for SPDX fields this tool does not determine
pub const NOASSERTION: &str = "NOASSERTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceCategory {
    PackageManager,
}

impl ReferenceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceCategory::PackageManager => "PACKAGE-MANAGER",
        }
    }
}

/// Package external reference, e.g. `PACKAGE-MANAGER npm lodash@4.17.21`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    category: ReferenceCategory,
    reference_type: String,
    locator: String,
}

impl ExternalReference {
    /// npm package-manager reference with a `name@version` locator
    pub fn npm(package: &Package) -> Self {
        Self {
            category: ReferenceCategory::PackageManager,
            reference_type: "npm".to_string(),
            locator: package.to_string(),
        }
    }

    pub fn category(&self) -> ReferenceCategory {
        self.category
    }

    pub fn reference_type(&self) -> &str {
        &self.reference_type
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}

/// One package section of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    spdx_id: SpdxId,
    name: String,
    version: String,
    download_location: String,
    files_analyzed: bool,
    home_page: String,
    license_concluded: String,
    license_declared: String,
    copyright_text: String,
    external_references: Vec<ExternalReference>,
}

impl PackageRecord {
    /// Builds the record for `package` under `spdx_id` with
    /// `license_declared` as its declared license; an empty string becomes
    /// `NOASSERTION`.
    pub fn new(package: &Package, spdx_id: SpdxId, license_declared: &str) -> Self {
        let license_declared = if license_declared.is_empty() {
            NOASSERTION
        } else {
            license_declared
        };

        Self {
            spdx_id,
            name: package.name().to_string(),
            version: package.version().to_string(),
            download_location: NOASSERTION.to_string(),
            files_analyzed: false,
            home_page: format!(
                "https://www.npmjs.com/package/{}/v/{}",
                package.name(),
                package.version()
            ),
            license_concluded: NOASSERTION.to_string(),
            license_declared: license_declared.to_string(),
            copyright_text: NOASSERTION.to_string(),
            external_references: vec![ExternalReference::npm(package)],
        }
    }

    pub fn spdx_id(&self) -> &SpdxId {
        &self.spdx_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn download_location(&self) -> &str {
        &self.download_location
    }

    pub fn files_analyzed(&self) -> bool {
        self.files_analyzed
    }

    pub fn home_page(&self) -> &str {
        &self.home_page
    }

    pub fn license_concluded(&self) -> &str {
        &self.license_concluded
    }

    pub fn license_declared(&self) -> &str {
        &self.license_declared
    }

    pub fn copyright_text(&self) -> &str {
        &self.copyright_text
    }

    pub fn external_references(&self) -> &[ExternalReference] {
        &self.external_references
    }
}

/// The assembled bill of materials. Packages are ordered root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomDocument {
    creation_info: CreationInfo,
    packages: Vec<PackageRecord>,
    relationships: Vec<RelationshipRecord>,
    extracted_licenses: Vec<ExtractedLicenseEntry>,
}

impl SbomDocument {
    pub fn new(
        creation_info: CreationInfo,
        packages: Vec<PackageRecord>,
        relationships: Vec<RelationshipRecord>,
        extracted_licenses: Vec<ExtractedLicenseEntry>,
    ) -> Self {
        Self {
            creation_info,
            packages,
            relationships,
            extracted_licenses,
        }
    }

    pub fn creation_info(&self) -> &CreationInfo {
        &self.creation_info
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn relationships(&self) -> &[RelationshipRecord] {
        &self.relationships
    }

    pub fn extracted_licenses(&self) -> &[ExtractedLicenseEntry] {
        &self.extracted_licenses
    }

    pub fn document_id(&self) -> SpdxId {
        SpdxId::document()
    }

    pub fn find_package(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.iter().find(|p| p.name() == name)
    }
}
