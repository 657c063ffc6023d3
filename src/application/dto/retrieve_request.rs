use std::path::PathBuf;
use std::time::Duration;

/// RetrieveRequest - Request DTO for the dependency retrieval use case
#[derive(Debug, Clone)]
pub struct RetrieveRequest {
    /// Path to the project's package.json
    pub package_json: PathBuf,
    /// Path to the project's package-lock.json
    pub package_lock_json: PathBuf,
    /// Where the retrieved dependency graph is written
    pub results_json: PathBuf,
    /// Pause between consecutive registry queries
    pub request_delay: Duration,
}

impl RetrieveRequest {
    pub fn new(
        package_json: PathBuf,
        package_lock_json: PathBuf,
        results_json: PathBuf,
        request_delay: Duration,
    ) -> Self {
        Self {
            package_json,
            package_lock_json,
            results_json,
            request_delay,
        }
    }
}
