use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{PackageRecord, SbomDocument};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxJsonDocument {
    spdx_version: String,
    data_license: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    document_namespace: String,
    creation_info: CreationInfoJson,
    document_describes: Vec<String>,
    packages: Vec<PackageJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_extracted_licensing_infos: Vec<ExtractedLicenseJson>,
    relationships: Vec<RelationshipJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfoJson {
    created: String,
    creators: Vec<String>,
    license_list_version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    version_info: String,
    download_location: String,
    files_analyzed: bool,
    homepage: String,
    license_concluded: String,
    license_declared: String,
    copyright_text: String,
    external_refs: Vec<ExternalRefJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRefJson {
    reference_category: String,
    reference_type: String,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractedLicenseJson {
    license_id: String,
    extracted_text: String,
    name: String,
    comment: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelationshipJson {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

impl From<&PackageRecord> for PackageJson {
    fn from(package: &PackageRecord) -> Self {
        Self {
            name: package.name().to_string(),
            spdx_id: package.spdx_id().to_string(),
            version_info: package.version().to_string(),
            download_location: package.download_location().to_string(),
            files_analyzed: package.files_analyzed(),
            homepage: package.home_page().to_string(),
            license_concluded: package.license_concluded().to_string(),
            license_declared: package.license_declared().to_string(),
            copyright_text: package.copyright_text().to_string(),
            external_refs: package
                .external_references()
                .iter()
                .map(|r| ExternalRefJson {
                    reference_category: r.category().as_str().to_string(),
                    reference_type: r.reference_type().to_string(),
                    reference_locator: r.locator().to_string(),
                })
                .collect(),
        }
    }
}

/// SpdxJsonFormatter adapter for generating SPDX JSON documents
///
/// This adapter implements the SbomFormatter port for the JSON encoding of
/// the same document the tag-value formatter writes.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SbomDocument) -> Result<String> {
        let info = document.creation_info();

        let json = SpdxJsonDocument {
            spdx_version: info.spdx_version().to_string(),
            data_license: info.data_license().to_string(),
            spdx_id: document.document_id().to_string(),
            name: info.document_name().to_string(),
            document_namespace: info.document_namespace().to_string(),
            creation_info: CreationInfoJson {
                created: info.created().to_string(),
                creators: info.creators().to_vec(),
                license_list_version: info.license_list_version().to_string(),
            },
            document_describes: document
                .packages()
                .first()
                .map(|root| vec![root.spdx_id().to_string()])
                .unwrap_or_default(),
            packages: document.packages().iter().map(PackageJson::from).collect(),
            has_extracted_licensing_infos: document
                .extracted_licenses()
                .iter()
                .map(|l| ExtractedLicenseJson {
                    license_id: l.license_id().to_string(),
                    extracted_text: l.extracted_text().to_string(),
                    name: l.license_name().to_string(),
                    comment: l.comment().to_string(),
                })
                .collect(),
            relationships: document
                .relationships()
                .iter()
                .map(|r| RelationshipJson {
                    spdx_element_id: r.subject().to_string(),
                    relationship_type: r.kind().to_string(),
                    related_spdx_element: r.object().to_string(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&json).map_err(Into::into)
    }
}
