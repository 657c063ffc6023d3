use async_trait::async_trait;
use npm_sbom::ports::outbound::RegistryVersion;
use npm_sbom::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock RegistryClient answering from a fixed table
#[derive(Default)]
pub struct MockRegistryClient {
    versions: HashMap<String, RegistryVersion>,
    requests: Mutex<Vec<String>>,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, name: &str, version: &str, license: Option<&str>) -> Self {
        self.versions.insert(
            format!("{}@{}", name, version),
            RegistryVersion {
                name: name.to_string(),
                version: version.to_string(),
                license: license.map(str::to_string),
                ..Default::default()
            },
        );
        self
    }

    /// Records that `name@version` depends on `dependency` (range `^dep_version`)
    pub fn with_dependency(
        mut self,
        name: &str,
        version: &str,
        dependency: &str,
        dep_version: &str,
    ) -> Self {
        if let Some(entry) = self.versions.get_mut(&format!("{}@{}", name, version)) {
            entry
                .dependencies
                .insert(dependency.to_string(), format!("^{}", dep_version));
        }
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    async fn fetch_version(&self, package_name: &str, version: &str) -> Result<RegistryVersion> {
        let key = format!("{}@{}", package_name, version);
        self.requests.lock().unwrap().push(key.clone());
        self.versions
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock registry has no entry for {}", key))
    }
}
