use super::LicenseReconciler;
use crate::sbom_generation::domain::{ClassifiedLicense, DependencyGraph, LicenseCatalog};
use std::collections::BTreeMap;

/// One dependency listed under a license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageVersionEntry {
    pub package: String,
    pub version: String,
    pub is_direct_dependency: bool,
    pub is_direct_dev_dependency: bool,
}

/// All dependencies sharing one resolved license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseGroup {
    /// The declared expression, or the generated `LicenseRef-` identifier
    pub id: String,
    /// Whether the license was recognized by the catalog
    pub valid: bool,
    /// Original text behind a `LicenseRef-` identifier
    pub extracted_text: Option<String>,
    pub dependencies: Vec<PackageVersionEntry>,
}

/// Per-license summary of a dependency graph. Groups are ordered by id,
/// dependencies within a group by package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseReport {
    pub root_name: String,
    pub root_version: String,
    pub groups: Vec<LicenseGroup>,
}

impl LicenseReport {
    pub fn total_dependencies(&self) -> usize {
        self.groups.iter().map(|g| g.dependencies.len()).sum()
    }

    pub fn invalid_group_count(&self) -> usize {
        self.groups.iter().filter(|g| !g.valid).count()
    }
}

/// LicenseReportBuilder groups a graph's dependencies by license, using the
/// same reconciliation as document assembly so `LicenseRef-` identifiers
/// match between the report and the SBOM.
pub struct LicenseReportBuilder;

impl LicenseReportBuilder {
    pub fn build(graph: &DependencyGraph, catalog: &LicenseCatalog) -> LicenseReport {
        let mut reconciler = LicenseReconciler::new(catalog);
        // The root is not listed, but claims its identifier first
        reconciler.reconcile(graph.root().license());

        let mut groups: BTreeMap<String, LicenseGroup> = BTreeMap::new();

        for node in graph.nodes() {
            let license = reconciler.reconcile(node.license());
            let group = groups
                .entry(license.declared().to_string())
                .or_insert_with(|| Self::empty_group(&license));

            group.dependencies.push(PackageVersionEntry {
                package: node.name().to_string(),
                version: node.version().to_string(),
                is_direct_dependency: node.is_direct_dependency(),
                is_direct_dev_dependency: node.is_direct_dev_dependency(),
            });
        }

        LicenseReport {
            root_name: graph.root().name().to_string(),
            root_version: graph.root().version().to_string(),
            groups: groups.into_values().collect(),
        }
    }

    fn empty_group(license: &ClassifiedLicense) -> LicenseGroup {
        let extracted_text = match license {
            ClassifiedLicense::Valid(_) => None,
            ClassifiedLicense::Extracted { original_text, .. } => Some(original_text.clone()),
        };
        LicenseGroup {
            id: license.declared().to_string(),
            valid: license.is_valid(),
            extracted_text,
            dependencies: Vec::new(),
        }
    }
}
