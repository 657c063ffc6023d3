use super::file_writer::write_atomically;
use crate::ports::outbound::ResultsStore;
use crate::sbom_generation::domain::{DependencyGraph, DependencyNode, RequirementMap, RootPackage};
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct ResultsJson {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    license: String,
    #[serde(default)]
    results: BTreeMap<String, DependencyJson>,
}

#[derive(Serialize, Deserialize)]
struct DependencyJson {
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    license: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    dependencies: RequirementMap,
    #[serde(
        default,
        rename = "devDependencies",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    dev_dependencies: RequirementMap,
    #[serde(default, rename = "isDirectDep", skip_serializing_if = "is_false")]
    is_direct_dep: bool,
    #[serde(default, rename = "isDirectDevDep", skip_serializing_if = "is_false")]
    is_direct_dev_dep: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&DependencyNode> for DependencyJson {
    fn from(node: &DependencyNode) -> Self {
        Self {
            name: node.name().to_string(),
            version: node.version().to_string(),
            license: node.license().to_string(),
            dependencies: node.dependencies().clone(),
            dev_dependencies: node.dev_dependencies().clone(),
            is_direct_dep: node.is_direct_dependency(),
            is_direct_dev_dep: node.is_direct_dev_dependency(),
        }
    }
}

impl DependencyJson {
    fn into_node(self) -> Result<DependencyNode> {
        Ok(DependencyNode::new(self.name, self.version, self.license)?
            .with_dependencies(self.dependencies)
            .with_dev_dependencies(self.dev_dependencies)
            .direct(self.is_direct_dep)
            .direct_dev(self.is_direct_dev_dep))
    }
}

/// JsonResultsStore adapter persisting dependency graphs as JSON files
///
/// The layout is an object with the root's `name`, `version` and `license`
/// plus a `results` map from dependency name to its retrieved details.
pub struct JsonResultsStore;

impl JsonResultsStore {
    pub fn new() -> Self {
        Self
    }

    fn load_error(path: &Path, details: String) -> anyhow::Error {
        SbomError::ResultsLoadError {
            path: path.to_path_buf(),
            details,
        }
        .into()
    }
}

impl Default for JsonResultsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsStore for JsonResultsStore {
    fn save(&self, graph: &DependencyGraph, path: &Path) -> Result<()> {
        let root = graph.root();
        let results = ResultsJson {
            name: root.name().to_string(),
            version: root.version().to_string(),
            license: root.license().to_string(),
            results: graph
                .nodes()
                .map(|node| (node.name().to_string(), DependencyJson::from(node)))
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&results)
            .map_err(|e| anyhow::anyhow!("Failed to serialize results: {}", e))?;
        json.push('\n');

        write_atomically(path, json.as_bytes())
    }

    fn load(&self, path: &Path) -> Result<DependencyGraph> {
        let content = read_regular_file(path, "results file")
            .map_err(|e| Self::load_error(path, format!("{:#}", e)))?;

        let results: ResultsJson =
            serde_json::from_str(&content).map_err(|e| Self::load_error(path, e.to_string()))?;

        let root = RootPackage::new(results.name, results.version, results.license)
            .map_err(|e| Self::load_error(path, format!("root package: {}", e)))?;

        let mut entries = Vec::with_capacity(results.results.len());
        for (key, dependency) in results.results {
            let node = dependency
                .into_node()
                .map_err(|e| Self::load_error(path, format!("entry '{}': {}", key, e)))?;
            entries.push((key, node));
        }

        DependencyGraph::from_entries(root, entries)
    }
}
