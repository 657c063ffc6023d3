use super::PackageIdRegistry;
use crate::sbom_generation::domain::{DependencyGraph, RelationshipRecord};

/// RelationshipBuilder derives the document's edges from a dependency graph.
///
/// Edges point from the dependency to its dependent:
/// - `DOCUMENT DESCRIBES root`, once
/// - `dep PREREQUISITE_FOR node` for each runtime requirement of a node that
///   is installed in the graph, at its installed version
/// - `node PREREQUISITE_FOR root` for direct dependencies
/// - `node BUILD_TOOL_OF root` for direct development dependencies
///
/// Requirements naming a package missing from the graph (optional or
/// unresolved ones) produce no edge. Endpoints are the identifiers `ids`
/// assigned, so packages whose names sanitize alike stay distinct.
pub struct RelationshipBuilder;

impl RelationshipBuilder {
    pub fn build(graph: &DependencyGraph, ids: &PackageIdRegistry) -> Vec<RelationshipRecord> {
        let root = ids.root();
        let mut relationships = vec![RelationshipRecord::describes(root)];

        for node in graph.nodes() {
            let Some(node_id) = ids.node(node.name()) else {
                continue;
            };

            for dep_name in node.dependencies().keys() {
                if let Some(dep_id) = ids.node(dep_name) {
                    relationships.push(RelationshipRecord::prerequisite_for(dep_id, node_id));
                }
            }

            if node.is_direct_dependency() {
                relationships.push(RelationshipRecord::prerequisite_for(node_id, root));
            }
            if node.is_direct_dev_dependency() {
                relationships.push(RelationshipRecord::build_tool_of(node_id, root));
            }
        }

        relationships
    }
}
