use super::{LicenseReconciler, PackageIdRegistry, RelationshipBuilder, SbomGenerator};
use crate::sbom_generation::domain::{DependencyGraph, LicenseCatalog, PackageRecord, SbomDocument};
use chrono::{DateTime, Utc};

/// DocumentAssembler composes a complete SBOM document from a resolved
/// dependency graph and a license catalog.
///
/// Assembly performs no I/O and cannot fail: graph integrity is enforced
/// when the graph is built, and unrecognized licenses become extracted
/// license entries rather than errors.
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Assembles a document stamped with the current time
    pub fn assemble(graph: &DependencyGraph, catalog: &LicenseCatalog) -> SbomDocument {
        Self::assemble_at(graph, catalog, Utc::now())
    }

    /// Assembles a document stamped with `created`
    ///
    /// Package records come root first, then nodes in name order. The root
    /// license is reconciled before any node, so its `LicenseRef-` keeps the
    /// unsuffixed identifier when texts collide.
    pub fn assemble_at(
        graph: &DependencyGraph,
        catalog: &LicenseCatalog,
        created: DateTime<Utc>,
    ) -> SbomDocument {
        let root = graph.root();
        let creation_info = SbomGenerator::generate_default_creation_info(
            root,
            catalog.license_list_version(),
            created,
        );

        let ids = PackageIdRegistry::for_graph(graph);
        let mut reconciler = LicenseReconciler::new(catalog);
        let mut packages = Vec::with_capacity(graph.total_package_count() + 1);

        let root_license = reconciler.reconcile(root.license());
        packages.push(PackageRecord::new(
            root.package(),
            ids.root().clone(),
            root_license.declared(),
        ));

        for node in graph.nodes() {
            let Some(id) = ids.node(node.name()) else {
                continue;
            };
            let license = reconciler.reconcile(node.license());
            packages.push(PackageRecord::new(
                node.package(),
                id.clone(),
                license.declared(),
            ));
        }

        let relationships = RelationshipBuilder::build(graph, &ids);

        SbomDocument::new(
            creation_info,
            packages,
            relationships,
            reconciler.into_registry().into_entries(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{DependencyNode, RelationshipKind, RootPackage};
    use chrono::TimeZone;

    fn catalog(ids: &[&str]) -> LicenseCatalog {
        LicenseCatalog::new(ids.iter().map(|s| s.to_string()), Vec::<String>::new())
    }

    fn root(license: &str) -> RootPackage {
        RootPackage::new("app".to_string(), "1.0.0".to_string(), license.to_string()).unwrap()
    }

    fn node(name: &str, version: &str, license: &str) -> DependencyNode {
        DependencyNode::new(name.to_string(), version.to_string(), license.to_string()).unwrap()
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_assemble_with_custom_license() {
        let mut graph = DependencyGraph::new(root("MIT"));
        graph
            .insert(node("weird-lib", "3.1.0", "Some Custom License").direct(true))
            .unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&["MIT"]), created());

        let packages = doc.packages();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name(), "app");
        assert_eq!(packages[0].version(), "1.0.0");
        assert_eq!(packages[0].license_declared(), "MIT");
        assert_eq!(packages[1].name(), "weird-lib");
        assert_eq!(packages[1].version(), "3.1.0");
        assert_eq!(
            packages[1].license_declared(),
            "LicenseRef-Some-Custom-License"
        );

        let extracted = doc.extracted_licenses();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].license_id(), "LicenseRef-Some-Custom-License");
        assert_eq!(extracted[0].extracted_text(), "Some Custom License");

        let rels = doc.relationships();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].kind(), RelationshipKind::Describes);
        assert_eq!(rels[0].subject().as_str(), "SPDXRef-DOCUMENT");
        assert_eq!(rels[0].object().as_str(), "SPDXRef-app-1.0.0");
        assert_eq!(rels[1].kind(), RelationshipKind::PrerequisiteFor);
        assert_eq!(rels[1].subject().as_str(), "SPDXRef-weird-lib-3.1.0");
        assert_eq!(rels[1].object().as_str(), "SPDXRef-app-1.0.0");

        assert_eq!(doc.creation_info().created(), "2024-01-02T03:04:05Z");
        assert_eq!(doc.creation_info().document_name(), "app");
    }

    #[test]
    fn test_shared_custom_license_is_extracted_once() {
        let mut graph = DependencyGraph::new(root("MIT"));
        graph.insert(node("a", "1.0.0", "Custom")).unwrap();
        graph.insert(node("b", "1.0.0", "Custom")).unwrap();
        graph.insert(node("c", "1.0.0", "Custom!")).unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&["MIT"]), created());

        assert_eq!(doc.extracted_licenses().len(), 2);
        assert_eq!(
            doc.find_package("a").unwrap().license_declared(),
            "LicenseRef-Custom"
        );
        assert_eq!(
            doc.find_package("b").unwrap().license_declared(),
            "LicenseRef-Custom"
        );
        assert_eq!(
            doc.find_package("c").unwrap().license_declared(),
            "LicenseRef-Custom-1"
        );
    }

    #[test]
    fn test_root_custom_license_shared_with_node() {
        let mut graph = DependencyGraph::new(root("Proprietary"));
        graph.insert(node("internal", "0.1.0", "Proprietary")).unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&["MIT"]), created());

        assert_eq!(doc.extracted_licenses().len(), 1);
        assert_eq!(doc.packages()[0].license_declared(), "LicenseRef-Proprietary");
        assert_eq!(doc.packages()[1].license_declared(), "LicenseRef-Proprietary");
    }

    #[test]
    fn test_empty_licenses_become_noassertion() {
        let mut graph = DependencyGraph::new(root(""));
        graph.insert(node("bare", "1.0.0", "")).unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&[]), created());

        assert!(doc.extracted_licenses().is_empty());
        assert_eq!(doc.packages()[0].license_declared(), "NOASSERTION");
        assert_eq!(doc.packages()[1].license_declared(), "NOASSERTION");
    }

    #[test]
    fn test_missing_dependency_does_not_fail_assembly() {
        let mut graph = DependencyGraph::new(root("MIT"));
        let mut deps = crate::sbom_generation::domain::RequirementMap::new();
        deps.insert("ghost".to_string(), "^1.0.0".to_string());
        graph
            .insert(node("lib", "2.0.0", "MIT").with_dependencies(deps))
            .unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&["MIT"]), created());

        assert_eq!(doc.packages().len(), 2);
        assert_eq!(doc.relationships().len(), 1);
    }

    #[test]
    fn test_license_list_version_follows_catalog() {
        let graph = DependencyGraph::new(root("MIT"));
        let catalog = catalog(&["MIT"]).with_license_list_version(Some("3.22".to_string()));

        let doc = DocumentAssembler::assemble(&graph, &catalog);

        assert_eq!(doc.creation_info().license_list_version(), "3.22");
    }

    #[test]
    fn test_package_ids_are_unique_within_document() {
        let mut graph = DependencyGraph::new(root("MIT"));
        graph
            .insert(node("string_decoder", "1.3.0", "MIT").direct(true))
            .unwrap();
        graph
            .insert(node("string-decoder", "1.3.0", "MIT").direct(true))
            .unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&["MIT"]), created());

        let ids: Vec<&str> = doc.packages().iter().map(|p| p.spdx_id().as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "SPDXRef-app-1.0.0",
                "SPDXRef-string-decoder-1.3.0",
                "SPDXRef-string-decoder-1.3.0-1"
            ]
        );
        assert_eq!(
            doc.find_package("string_decoder").unwrap().spdx_id().as_str(),
            "SPDXRef-string-decoder-1.3.0-1"
        );

        let subjects: Vec<&str> = doc
            .relationships()
            .iter()
            .skip(1)
            .map(|r| r.subject().as_str())
            .collect();
        assert_eq!(
            subjects,
            vec!["SPDXRef-string-decoder-1.3.0", "SPDXRef-string-decoder-1.3.0-1"]
        );
    }

    #[test]
    fn test_root_id_is_not_shared_with_a_node() {
        let root =
            RootPackage::new("my_app".to_string(), "1.0.0".to_string(), "MIT".to_string()).unwrap();
        let mut graph = DependencyGraph::new(root);
        graph
            .insert(node("my-app", "1.0.0", "MIT").direct(true))
            .unwrap();

        let doc = DocumentAssembler::assemble_at(&graph, &catalog(&["MIT"]), created());

        assert_eq!(doc.packages()[0].spdx_id().as_str(), "SPDXRef-my-app-1.0.0");
        assert_eq!(doc.packages()[1].spdx_id().as_str(), "SPDXRef-my-app-1.0.0-1");

        let rels = doc.relationships();
        assert_eq!(rels[0].object().as_str(), "SPDXRef-my-app-1.0.0");
        assert_eq!(rels[1].subject().as_str(), "SPDXRef-my-app-1.0.0-1");
        assert_eq!(rels[1].object().as_str(), "SPDXRef-my-app-1.0.0");
    }
}
