use npm_sbom::prelude::*;
use npm_sbom::shared::error::SbomError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory ResultsStore; clones share the same slot so one use case can
/// save what another loads.
#[derive(Default, Clone)]
pub struct MockResultsStore {
    saved: Arc<Mutex<Option<(DependencyGraph, PathBuf)>>>,
}

impl MockResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(graph: DependencyGraph) -> Self {
        let store = Self::default();
        *store.saved.lock().unwrap() = Some((graph, PathBuf::from("results.json")));
        store
    }

    pub fn saved_graph(&self) -> Option<DependencyGraph> {
        self.saved.lock().unwrap().as_ref().map(|(g, _)| g.clone())
    }

    pub fn saved_path(&self) -> Option<PathBuf> {
        self.saved.lock().unwrap().as_ref().map(|(_, p)| p.clone())
    }
}

impl ResultsStore for MockResultsStore {
    fn save(&self, graph: &DependencyGraph, path: &Path) -> Result<()> {
        *self.saved.lock().unwrap() = Some((graph.clone(), path.to_path_buf()));
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<DependencyGraph> {
        self.saved_graph().ok_or_else(|| {
            SbomError::ResultsLoadError {
                path: path.to_path_buf(),
                details: "nothing saved".to_string(),
            }
            .into()
        })
    }
}
