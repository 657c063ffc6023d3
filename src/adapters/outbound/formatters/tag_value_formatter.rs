use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    CreationInfo, ExtractedLicenseEntry, PackageRecord, RelationshipRecord, SbomDocument,
};
use crate::shared::Result;

/// TagValueFormatter adapter for generating SPDX 2.1 tag-value documents
///
/// This adapter implements the SbomFormatter port. Sections are written in
/// order: creation info, one block per package, other licenses (omitted when
/// there are none), relationships.
pub struct TagValueFormatter;

impl TagValueFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Wraps multi-line values in `<text>` so they stay one tag
    fn textify(value: &str) -> String {
        if value.contains('\n') {
            format!("<text>{}</text>", value)
        } else {
            value.to_string()
        }
    }

    fn write_creation_info(out: &mut String, info: &CreationInfo, document_id: &str) {
        out.push_str(&format!("SPDXVersion: {}\n", info.spdx_version()));
        out.push_str(&format!("DataLicense: {}\n", info.data_license()));
        out.push_str(&format!("SPDXID: {}\n", document_id));
        out.push_str(&format!("DocumentName: {}\n", info.document_name()));
        out.push_str(&format!("DocumentNamespace: {}\n", info.document_namespace()));
        out.push_str(&format!("LicenseListVersion: {}\n", info.license_list_version()));
        for creator in info.creators() {
            out.push_str(&format!("Creator: {}\n", creator));
        }
        out.push_str(&format!("Created: {}\n\n", info.created()));
    }

    fn write_package(out: &mut String, package: &PackageRecord) {
        out.push_str(&format!("##### Package: {}\n\n", package.name()));
        out.push_str(&format!("PackageName: {}\n", package.name()));
        out.push_str(&format!("SPDXID: {}\n", package.spdx_id()));
        out.push_str(&format!("PackageVersion: {}\n", package.version()));
        out.push_str(&format!(
            "PackageDownloadLocation: {}\n",
            package.download_location()
        ));
        out.push_str(&format!("FilesAnalyzed: {}\n", package.files_analyzed()));
        out.push_str(&format!("PackageHomePage: {}\n", package.home_page()));
        out.push_str(&format!(
            "PackageLicenseConcluded: {}\n",
            package.license_concluded()
        ));
        out.push_str(&format!(
            "PackageLicenseDeclared: {}\n",
            package.license_declared()
        ));
        out.push_str(&format!(
            "PackageCopyrightText: {}\n",
            Self::textify(package.copyright_text())
        ));
        for reference in package.external_references() {
            out.push_str(&format!(
                "ExternalRef: {} {} {}\n",
                reference.category().as_str(),
                reference.reference_type(),
                reference.locator()
            ));
        }
        out.push('\n');
    }

    fn write_other_licenses(out: &mut String, licenses: &[ExtractedLicenseEntry]) {
        if licenses.is_empty() {
            return;
        }

        out.push_str("##### Other Licenses\n\n");
        for license in licenses {
            out.push_str(&format!("LicenseID: {}\n", license.license_id()));
            out.push_str(&format!(
                "ExtractedText: <text>{}</text>\n",
                license.extracted_text()
            ));
            out.push_str(&format!(
                "LicenseName: {}\n",
                Self::textify(license.license_name())
            ));
            out.push_str(&format!(
                "LicenseComment: {}\n\n",
                Self::textify(license.comment())
            ));
        }
    }

    fn write_relationships(out: &mut String, relationships: &[RelationshipRecord]) {
        out.push_str("##### Relationships\n\n");
        for relationship in relationships {
            out.push_str(&format!(
                "Relationship: {} {} {}\n",
                relationship.subject(),
                relationship.kind(),
                relationship.object()
            ));
        }
    }
}

impl Default for TagValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for TagValueFormatter {
    fn format(&self, document: &SbomDocument) -> Result<String> {
        let mut out = String::new();

        Self::write_creation_info(
            &mut out,
            document.creation_info(),
            document.document_id().as_str(),
        );
        for package in document.packages() {
            Self::write_package(&mut out, package);
        }
        Self::write_other_licenses(&mut out, document.extracted_licenses());
        Self::write_relationships(&mut out, document.relationships());

        Ok(out)
    }
}
