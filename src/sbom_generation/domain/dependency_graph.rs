use super::Package;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Map of dependency name to the version range the dependent requested
pub type RequirementMap = BTreeMap<String, String>;

/// One resolved dependency of the root package
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyNode {
    package: Package,
    license: String,
    dependencies: RequirementMap,
    dev_dependencies: RequirementMap,
    is_direct_dependency: bool,
    is_direct_dev_dependency: bool,
}

impl DependencyNode {
    /// Creates a node with no outgoing requirements and no direct flags.
    /// An empty `license` means the registry declared none.
    pub fn new(name: String, version: String, license: String) -> Result<Self> {
        Ok(Self {
            package: Package::new(name, version)?,
            license,
            dependencies: RequirementMap::new(),
            dev_dependencies: RequirementMap::new(),
            is_direct_dependency: false,
            is_direct_dev_dependency: false,
        })
    }

    pub fn with_dependencies(mut self, dependencies: RequirementMap) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_dev_dependencies(mut self, dev_dependencies: RequirementMap) -> Self {
        self.dev_dependencies = dev_dependencies;
        self
    }

    pub fn direct(mut self, is_direct_dependency: bool) -> Self {
        self.is_direct_dependency = is_direct_dependency;
        self
    }

    pub fn direct_dev(mut self, is_direct_dev_dependency: bool) -> Self {
        self.is_direct_dev_dependency = is_direct_dev_dependency;
        self
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        self.package.name()
    }

    pub fn version(&self) -> &str {
        self.package.version()
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn dependencies(&self) -> &RequirementMap {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &RequirementMap {
        &self.dev_dependencies
    }

    pub fn is_direct_dependency(&self) -> bool {
        self.is_direct_dependency
    }

    pub fn is_direct_dev_dependency(&self) -> bool {
        self.is_direct_dev_dependency
    }
}

/// The package a graph is rooted at
#[derive(Debug, Clone, PartialEq)]
pub struct RootPackage {
    package: Package,
    license: String,
}

impl RootPackage {
    pub fn new(name: String, version: String, license: String) -> Result<Self> {
        Ok(Self {
            package: Package::new(name, version)?,
            license,
        })
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        self.package.name()
    }

    pub fn version(&self) -> &str {
        self.package.version()
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}

/// DependencyGraph aggregate: the root package plus every installed
/// dependency, keyed by name.
///
/// Every key equals the name of the node stored under it, and each name
/// appears once. Nodes iterate in name order.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyGraph {
    root: RootPackage,
    nodes: BTreeMap<String, DependencyNode>,
}

impl DependencyGraph {
    pub fn new(root: RootPackage) -> Self {
        Self {
            root,
            nodes: BTreeMap::new(),
        }
    }

    /// Builds a graph from an externally keyed mapping, checking that every
    /// key matches its node's name.
    ///
    /// # Errors
    /// Returns `SbomError::GraphIntegrityError` on a key/name mismatch or a
    /// repeated name.
    pub fn from_entries<I>(root: RootPackage, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, DependencyNode)>,
    {
        let mut graph = Self::new(root);
        for (key, node) in entries {
            if key != node.name() {
                return Err(SbomError::GraphIntegrityError {
                    details: format!(
                        "key '{}' holds package '{}@{}'",
                        key,
                        node.name(),
                        node.version()
                    ),
                }
                .into());
            }
            graph.insert(node)?;
        }
        Ok(graph)
    }

    /// Adds a node under its own name.
    ///
    /// # Errors
    /// Returns `SbomError::GraphIntegrityError` if a node with the same name
    /// is already present.
    pub fn insert(&mut self, node: DependencyNode) -> Result<()> {
        if let Some(existing) = self.nodes.get(node.name()) {
            return Err(SbomError::GraphIntegrityError {
                details: format!(
                    "package '{}' encountered twice (versions {} and {})",
                    node.name(),
                    existing.version(),
                    node.version()
                ),
            }
            .into());
        }
        self.nodes.insert(node.name().to_string(), node);
        Ok(())
    }

    pub fn root(&self) -> &RootPackage {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&DependencyNode> {
        self.nodes.get(name)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DependencyNode> {
        self.nodes.values()
    }

    pub fn total_package_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.nodes().filter(|n| n.is_direct_dependency()).count()
    }

    pub fn direct_dev_dependency_count(&self) -> usize {
        self.nodes().filter(|n| n.is_direct_dev_dependency()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> RootPackage {
        RootPackage::new("app".to_string(), "1.0.0".to_string(), "MIT".to_string()).unwrap()
    }

    fn node(name: &str, version: &str) -> DependencyNode {
        DependencyNode::new(name.to_string(), version.to_string(), "MIT".to_string()).unwrap()
    }

    #[test]
    fn test_dependency_graph_insert_and_lookup() {
        let mut graph = DependencyGraph::new(root());
        graph.insert(node("lib", "2.0.0").direct(true)).unwrap();
        graph.insert(node("dev-tool", "0.3.0").direct_dev(true)).unwrap();
        graph.insert(node("transitive", "1.1.0")).unwrap();

        assert_eq!(graph.total_package_count(), 3);
        assert_eq!(graph.direct_dependency_count(), 1);
        assert_eq!(graph.direct_dev_dependency_count(), 1);
        assert_eq!(graph.get("lib").unwrap().version(), "2.0.0");
        assert!(graph.get("missing").is_none());
    }

    #[test]
    fn test_dependency_graph_nodes_iterate_in_name_order() {
        let mut graph = DependencyGraph::new(root());
        graph.insert(node("zeta", "1.0.0")).unwrap();
        graph.insert(node("alpha", "1.0.0")).unwrap();
        graph.insert(node("@scope/mid", "1.0.0")).unwrap();

        let names: Vec<&str> = graph.nodes().map(|n| n.name()).collect();
        assert_eq!(names, vec!["@scope/mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_dependency_graph_rejects_duplicate_name() {
        let mut graph = DependencyGraph::new(root());
        graph.insert(node("lib", "2.0.0")).unwrap();

        let err = graph.insert(node("lib", "2.1.0")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::GraphIntegrityError { .. })
        ));
        assert!(err.to_string().contains("encountered twice"));
    }

    #[test]
    fn test_from_entries_rejects_key_mismatch() {
        let entries = vec![("lib".to_string(), node("other-lib", "2.0.0"))];

        let err = DependencyGraph::from_entries(root(), entries).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::GraphIntegrityError { .. })
        ));
        assert!(err.to_string().contains("key 'lib'"));
    }

    #[test]
    fn test_from_entries_valid() {
        let entries = vec![
            ("lib".to_string(), node("lib", "2.0.0")),
            ("util".to_string(), node("util", "0.1.0")),
        ];

        let graph = DependencyGraph::from_entries(root(), entries).unwrap();
        assert_eq!(graph.total_package_count(), 2);
        assert_eq!(graph.root().name(), "app");
        assert_eq!(graph.root().license(), "MIT");
    }

    #[test]
    fn test_dependency_node_builders() {
        let mut deps = RequirementMap::new();
        deps.insert("util".to_string(), "^0.1.0".to_string());
        let mut dev_deps = RequirementMap::new();
        dev_deps.insert("mocha".to_string(), "^10.0.0".to_string());

        let n = node("lib", "2.0.0")
            .with_dependencies(deps)
            .with_dev_dependencies(dev_deps)
            .direct(true);

        assert_eq!(n.dependencies().get("util").unwrap(), "^0.1.0");
        assert_eq!(n.dev_dependencies().len(), 1);
        assert!(n.is_direct_dependency());
        assert!(!n.is_direct_dev_dependency());
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new(root());
        assert_eq!(graph.total_package_count(), 0);
        assert_eq!(graph.direct_dependency_count(), 0);
    }
}
