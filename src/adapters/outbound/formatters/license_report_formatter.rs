use crate::ports::outbound::ReportFormatter;
use crate::sbom_generation::services::{LicenseGroup, LicenseReport, PackageVersionEntry};
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct LicenseGroupJson<'a> {
    id: &'a str,
    valid: bool,
    #[serde(rename = "extractedText", skip_serializing_if = "Option::is_none")]
    extracted_text: Option<&'a str>,
    dependencies: Vec<PackageVersionJson<'a>>,
}

#[derive(Debug, Serialize)]
struct PackageVersionJson<'a> {
    package: &'a str,
    version: &'a str,
    #[serde(rename = "isDirectDep", skip_serializing_if = "is_false")]
    is_direct_dep: bool,
    #[serde(rename = "isDirectDevDep", skip_serializing_if = "is_false")]
    is_direct_dev_dep: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl<'a> From<&'a PackageVersionEntry> for PackageVersionJson<'a> {
    fn from(entry: &'a PackageVersionEntry) -> Self {
        Self {
            package: &entry.package,
            version: &entry.version,
            is_direct_dep: entry.is_direct_dependency,
            is_direct_dev_dep: entry.is_direct_dev_dependency,
        }
    }
}

impl<'a> From<&'a LicenseGroup> for LicenseGroupJson<'a> {
    fn from(group: &'a LicenseGroup) -> Self {
        Self {
            id: &group.id,
            valid: group.valid,
            extracted_text: group.extracted_text.as_deref(),
            dependencies: group.dependencies.iter().map(Into::into).collect(),
        }
    }
}

/// JsonReportFormatter adapter for the license summary
///
/// Renders an object keyed by license id, each value holding the id, its
/// validity and the dependencies under it.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &LicenseReport) -> Result<String> {
        let groups: BTreeMap<&str, LicenseGroupJson> = report
            .groups
            .iter()
            .map(|g| (g.id.as_str(), LicenseGroupJson::from(g)))
            .collect();

        serde_json::to_string_pretty(&groups).map_err(Into::into)
    }
}
