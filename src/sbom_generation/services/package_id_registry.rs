use crate::sbom_generation::domain::{DependencyGraph, Package, SpdxId};
use std::collections::{HashMap, HashSet};

/// PackageIdRegistry assigns every package of a graph an SPDX identifier
/// that is unique within one document.
///
/// Identifiers are minted root first, then nodes in name order. A package
/// whose base identifier is already taken gets `-1`, `-2`, ... appended
/// until a free one is found, so assignment is deterministic for a given
/// graph.
#[derive(Debug)]
pub struct PackageIdRegistry {
    root: SpdxId,
    by_name: HashMap<String, SpdxId>,
}

impl PackageIdRegistry {
    pub fn for_graph(graph: &DependencyGraph) -> Self {
        let mut taken = HashSet::new();
        let root = Self::mint(graph.root().package(), &mut taken);
        let by_name = graph
            .nodes()
            .map(|node| {
                (
                    node.name().to_string(),
                    Self::mint(node.package(), &mut taken),
                )
            })
            .collect();

        Self { root, by_name }
    }

    pub fn root(&self) -> &SpdxId {
        &self.root
    }

    /// Identifier of the graph node called `name`, if the graph has one
    pub fn node(&self, name: &str) -> Option<&SpdxId> {
        self.by_name.get(name)
    }

    fn mint(package: &Package, taken: &mut HashSet<SpdxId>) -> SpdxId {
        let base = SpdxId::base_for_package(package);
        let mut id = base.clone();
        let mut suffix = 1u64;
        while taken.contains(&id) {
            id = base.with_suffix(suffix);
            suffix += 1;
        }

        taken.insert(id.clone());
        id
    }
}
