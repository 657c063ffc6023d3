mod document_assembler;
mod extracted_license_registry;
mod license_reconciler;
mod license_report;
mod package_id_registry;
mod relationship_builder;
mod sbom_generator;

pub use document_assembler::DocumentAssembler;
pub use extracted_license_registry::ExtractedLicenseRegistry;
pub use license_reconciler::LicenseReconciler;
pub use license_report::{LicenseGroup, LicenseReport, LicenseReportBuilder, PackageVersionEntry};
pub use package_id_registry::PackageIdRegistry;
pub use relationship_builder::RelationshipBuilder;
pub use sbom_generator::{
    SbomGenerator, DATA_LICENSE, DEFAULT_LICENSE_LIST_VERSION, SPDX_VERSION,
};
