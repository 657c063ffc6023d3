use crate::sbom_generation::domain::DependencyGraph;
use crate::shared::Result;
use std::path::Path;

/// ResultsStore port for persisting retrieved dependency graphs
///
/// `retrieve` saves, `report` and `spdx` load, so registry queries are paid
/// for once.
pub trait ResultsStore {
    /// Writes the graph to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns `FileWriteError` if the file cannot be written.
    fn save(&self, graph: &DependencyGraph, path: &Path) -> Result<()>;

    /// Reads a graph previously written by [`ResultsStore::save`]
    ///
    /// # Errors
    /// Returns `ResultsLoadError` if the file cannot be read or decoded, and
    /// `GraphIntegrityError` if an entry's key differs from its name.
    fn load(&self, path: &Path) -> Result<DependencyGraph>;
}
