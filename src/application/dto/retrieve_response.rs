use crate::sbom_generation::domain::DependencyGraph;

/// RetrieveResponse - Response DTO from the dependency retrieval use case
///
/// Carries the graph that was written to the results file so callers can
/// summarize it without reading the file back.
#[derive(Debug, Clone)]
pub struct RetrieveResponse {
    pub graph: DependencyGraph,
}

impl RetrieveResponse {
    pub fn new(graph: DependencyGraph) -> Self {
        Self { graph }
    }
}
