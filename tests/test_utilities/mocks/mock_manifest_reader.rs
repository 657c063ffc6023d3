use npm_sbom::ports::outbound::{LockDependency, PackageLockManifest, PackageManifest};
use npm_sbom::prelude::*;
use std::path::Path;

/// Mock ManifestReader serving an in-memory package.json and lock file
pub struct MockManifestReader {
    manifest: PackageManifest,
    lock: PackageLockManifest,
}

impl MockManifestReader {
    pub fn new(name: &str, version: &str, license: Option<&str>) -> Self {
        Self {
            manifest: PackageManifest {
                name: Some(name.to_string()),
                version: Some(version.to_string()),
                license: license.map(str::to_string),
                ..Default::default()
            },
            lock: PackageLockManifest {
                name: Some(name.to_string()),
                version: Some(version.to_string()),
                lockfile_version: Some(2),
                ..Default::default()
            },
        }
    }

    /// Adds an installed package that package.json lists under `dependencies`
    pub fn with_direct(mut self, name: &str, version: &str) -> Self {
        self.manifest
            .dependencies
            .insert(name.to_string(), format!("^{}", version));
        self.with_installed(name, version)
    }

    /// Adds an installed package that package.json lists under `devDependencies`
    pub fn with_direct_dev(mut self, name: &str, version: &str) -> Self {
        self.manifest
            .dev_dependencies
            .insert(name.to_string(), format!("^{}", version));
        self.with_installed(name, version)
    }

    /// Adds a transitive install
    pub fn with_installed(mut self, name: &str, version: &str) -> Self {
        self.lock.dependencies.insert(
            name.to_string(),
            LockDependency {
                version: version.to_string(),
            },
        );
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<PackageManifest> {
        Ok(self.manifest.clone())
    }

    fn read_lock_manifest(&self, _path: &Path) -> Result<PackageLockManifest> {
        Ok(self.lock.clone())
    }
}
