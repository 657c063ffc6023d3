use crate::sbom_generation::domain::{CreationInfo, RootPackage};
use chrono::{DateTime, Utc};

pub const SPDX_VERSION: &str = "SPDX-2.1";
pub const DATA_LICENSE: &str = "CC0-1.0";

/// Used when the license list data does not state its own version
pub const DEFAULT_LICENSE_LIST_VERSION: &str = "3.5";

const NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// SbomGenerator service for generating document creation metadata
///
/// This service contains pure business logic: the namespace is derived from
/// the root package, the timestamp is supplied by the caller.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates creation metadata for a document describing `root`
    ///
    /// # Arguments
    /// * `root` - The package the document describes
    /// * `license_list_version` - Version of the license list used for classification
    /// * `tool_name` / `tool_version` - Identity recorded as the document's creator
    /// * `created` - Creation time, rendered as `YYYY-MM-DDTHH:MM:SSZ`
    pub fn generate_creation_info(
        root: &RootPackage,
        license_list_version: Option<&str>,
        tool_name: &str,
        tool_version: &str,
        created: DateTime<Utc>,
    ) -> CreationInfo {
        CreationInfo::new(
            SPDX_VERSION.to_string(),
            DATA_LICENSE.to_string(),
            root.name().to_string(),
            Self::document_namespace(root),
            license_list_version
                .unwrap_or(DEFAULT_LICENSE_LIST_VERSION)
                .to_string(),
            vec![format!("Tool: {}-{}", tool_name, tool_version)],
            created.format(CREATED_FORMAT).to_string(),
        )
    }

    /// Generates creation metadata with default tool information (npm-sbom)
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_creation_info(
        root: &RootPackage,
        license_list_version: Option<&str>,
        created: DateTime<Utc>,
    ) -> CreationInfo {
        Self::generate_creation_info(
            root,
            license_list_version,
            "npm-sbom",
            env!("CARGO_PKG_VERSION"),
            created,
        )
    }

    /// Same root name and version always yield the same namespace
    fn document_namespace(root: &RootPackage) -> String {
        format!("{}/{}-{}", NAMESPACE_BASE, root.name(), root.version())
    }
}
