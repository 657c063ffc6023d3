use crate::sbom_generation::domain::RequirementMap;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// The fields of `package.json` that matter for inventory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub dependencies: RequirementMap,
    pub dev_dependencies: RequirementMap,
}

impl PackageManifest {
    pub fn is_direct_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    pub fn is_direct_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies.contains_key(name)
    }
}

/// One installed package recorded in `package-lock.json`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockDependency {
    pub version: String,
}

/// The installed set from `package-lock.json`, one version per name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageLockManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub lockfile_version: Option<u32>,
    pub dependencies: BTreeMap<String, LockDependency>,
}

/// ManifestReader port for reading npm manifests
///
/// This port abstracts the file system operations and JSON decoding needed
/// to read `package.json` and `package-lock.json`.
pub trait ManifestReader {
    /// Reads and decodes a `package.json`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`ManifestNotFound`)
    /// - The file cannot be read or fails the security checks
    /// - The content is not a valid manifest (`ManifestParseError`)
    fn read_manifest(&self, path: &Path) -> Result<PackageManifest>;

    /// Reads and decodes a `package-lock.json`
    ///
    /// Lockfile versions 1 and 2 are read from the `dependencies` section,
    /// version 3 from `packages`. Only top-level installs are returned.
    ///
    /// # Errors
    /// Same conditions as [`ManifestReader::read_manifest`].
    fn read_lock_manifest(&self, path: &Path) -> Result<PackageLockManifest>;
}
