pub mod classified_license;
pub mod creation_info;
pub mod dependency_graph;
pub mod extracted_license;
pub mod license_catalog;
pub mod package;
pub mod relationship;
pub mod sbom_document;

pub use classified_license::{ClassifiedLicense, LicenseClassification};
pub use creation_info::CreationInfo;
pub use dependency_graph::{DependencyGraph, DependencyNode, RequirementMap, RootPackage};
pub use extracted_license::ExtractedLicenseEntry;
pub use license_catalog::LicenseCatalog;
pub use package::{Package, PackageName, Version};
pub use relationship::{RelationshipKind, RelationshipRecord, SpdxId};
pub use sbom_document::{
    ExternalReference, PackageRecord, ReferenceCategory, SbomDocument, NOASSERTION,
};
