use crate::adapters::outbound::license_field::normalize_license_field;
use crate::ports::outbound::{
    LicenseListReader, LockDependency, ManifestReader, PackageLockManifest, PackageManifest,
};
use crate::sbom_generation::domain::{LicenseCatalog, RequirementMap};
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_LOCK_JSON: &str = "package-lock.json";
const NODE_MODULES_PREFIX: &str = "node_modules/";
const NESTED_NODE_MODULES: &str = "/node_modules/";

#[derive(Deserialize)]
struct ManifestJson {
    name: Option<String>,
    version: Option<String>,
    license: Option<serde_json::Value>,
    #[serde(default)]
    dependencies: RequirementMap,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: RequirementMap,
}

#[derive(Deserialize)]
struct LockJson {
    name: Option<String>,
    version: Option<String>,
    #[serde(rename = "lockfileVersion")]
    lockfile_version: Option<u32>,
    dependencies: Option<BTreeMap<String, LockEntryJson>>,
    packages: Option<BTreeMap<String, LockEntryJson>>,
}

#[derive(Deserialize)]
struct LockEntryJson {
    version: Option<String>,
}

impl LockEntryJson {
    /// Entries without a version (links, bundled placeholders) are skipped
    fn into_lock_dependency(self) -> Option<LockDependency> {
        Some(LockDependency {
            version: self.version?,
        })
    }
}

#[derive(Deserialize)]
struct LicenseListJson {
    #[serde(rename = "licenseListVersion")]
    license_list_version: Option<String>,
    licenses: Vec<LicenseEntryJson>,
}

#[derive(Deserialize)]
struct LicenseEntryJson {
    #[serde(rename = "licenseId")]
    license_id: String,
}

#[derive(Deserialize)]
struct ExceptionListJson {
    exceptions: Vec<ExceptionEntryJson>,
}

#[derive(Deserialize)]
struct ExceptionEntryJson {
    #[serde(rename = "licenseExceptionId")]
    license_exception_id: String,
}

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ManifestReader and LicenseListReader ports.
/// Every read goes through the shared security checks (no symlinks, regular
/// files only, size cap).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_npm_file(&self, path: &Path, kind: &str, suggestion: &str) -> Result<String> {
        if !path.exists() {
            return Err(SbomError::ManifestNotFound {
                kind: kind.to_string(),
                path: path.to_path_buf(),
                suggestion: suggestion.to_string(),
            }
            .into());
        }
        read_regular_file(path, kind)
    }

    fn parse_error(path: &Path, kind: &str, e: serde_json::Error) -> anyhow::Error {
        SbomError::ManifestParseError {
            kind: kind.to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    }

    fn catalog_error(path: &Path, details: String) -> anyhow::Error {
        SbomError::CatalogLoadError {
            path: path.to_path_buf(),
            details,
        }
        .into()
    }

    /// `node_modules/<name>` → `<name>`; the root entry (`""`), nested
    /// installs and workspace paths yield `None`.
    fn top_level_package_name(key: &str) -> Option<&str> {
        let name = key.strip_prefix(NODE_MODULES_PREFIX)?;
        if name.is_empty() || name.contains(NESTED_NODE_MODULES) {
            return None;
        }
        Some(name)
    }

    fn collect_lock_dependencies(lock: LockJson) -> BTreeMap<String, LockDependency> {
        if let Some(dependencies) = lock.dependencies {
            return dependencies
                .into_iter()
                .filter_map(|(name, entry)| Some((name, entry.into_lock_dependency()?)))
                .collect();
        }

        lock.packages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, entry)| {
                let name = Self::top_level_package_name(&key)?.to_string();
                Some((name, entry.into_lock_dependency()?))
            })
            .collect()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<PackageManifest> {
        let content = self.read_npm_file(
            path,
            PACKAGE_JSON,
            "Pass the package.json of the project to inventory",
        )?;

        let manifest: ManifestJson = serde_json::from_str(&content)
            .map_err(|e| Self::parse_error(path, PACKAGE_JSON, e))?;

        Ok(PackageManifest {
            name: manifest.name,
            version: manifest.version,
            license: manifest.license.as_ref().and_then(normalize_license_field),
            dependencies: manifest.dependencies,
            dev_dependencies: manifest.dev_dependencies,
        })
    }

    fn read_lock_manifest(&self, path: &Path) -> Result<PackageLockManifest> {
        let content = self.read_npm_file(
            path,
            PACKAGE_LOCK_JSON,
            "Run 'npm install' to produce package-lock.json, then pass its path",
        )?;

        let lock: LockJson = serde_json::from_str(&content)
            .map_err(|e| Self::parse_error(path, PACKAGE_LOCK_JSON, e))?;

        Ok(PackageLockManifest {
            name: lock.name.clone(),
            version: lock.version.clone(),
            lockfile_version: lock.lockfile_version,
            dependencies: Self::collect_lock_dependencies(lock),
        })
    }
}

impl LicenseListReader for FileSystemReader {
    fn read_catalog(&self, license_list: &Path, exception_list: &Path) -> Result<LicenseCatalog> {
        let content = read_regular_file(license_list, "license list")
            .map_err(|e| Self::catalog_error(license_list, format!("{:#}", e)))?;
        let licenses: LicenseListJson = serde_json::from_str(&content)
            .map_err(|e| Self::catalog_error(license_list, e.to_string()))?;

        let content = read_regular_file(exception_list, "exception list")
            .map_err(|e| Self::catalog_error(exception_list, format!("{:#}", e)))?;
        let exceptions: ExceptionListJson = serde_json::from_str(&content)
            .map_err(|e| Self::catalog_error(exception_list, e.to_string()))?;

        Ok(LicenseCatalog::new(
            licenses.licenses.into_iter().map(|l| l.license_id),
            exceptions
                .exceptions
                .into_iter()
                .map(|e| e.license_exception_id),
        )
        .with_license_list_version(licenses.license_list_version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "package.json",
            r#"{
                "name": "app",
                "version": "1.0.0",
                "license": "MIT",
                "dependencies": {"lib": "^2.0.0"},
                "devDependencies": {"mocha": "^10.0.0"},
                "scripts": {"test": "mocha"}
            }"#,
        );

        let manifest = FileSystemReader::new().read_manifest(&path).unwrap();

        assert_eq!(manifest.name.as_deref(), Some("app"));
        assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
        assert_eq!(manifest.license.as_deref(), Some("MIT"));
        assert!(manifest.is_direct_dependency("lib"));
        assert!(manifest.is_direct_dev_dependency("mocha"));
        assert!(!manifest.is_direct_dependency("mocha"));
    }

    #[test]
    fn test_read_manifest_legacy_license_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "package.json",
            r#"{"name": "app", "version": "1.0.0", "license": {"type": "ISC"}}"#,
        );

        let manifest = FileSystemReader::new().read_manifest(&path).unwrap();
        assert_eq!(manifest.license.as_deref(), Some("ISC"));
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_read_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");

        let err = FileSystemReader::new().read_manifest(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ManifestNotFound { .. })
        ));
    }

    #[test]
    fn test_read_manifest_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "package.json", "{ not json");

        let err = FileSystemReader::new().read_manifest(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ManifestParseError { .. })
        ));
    }

    #[test]
    fn test_read_lock_manifest_v1() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "package-lock.json",
            r#"{
                "name": "app",
                "version": "1.0.0",
                "lockfileVersion": 1,
                "dependencies": {
                    "lib": {
                        "version": "2.0.0",
                        "resolved": "https://registry.npmjs.org/lib/-/lib-2.0.0.tgz",
                        "integrity": "sha512-abc",
                        "requires": {"util": "^0.1.0"},
                        "dependencies": {
                            "inner": {"version": "9.9.9"}
                        }
                    },
                    "mocha": {"version": "10.2.0", "dev": true}
                }
            }"#,
        );

        let lock = FileSystemReader::new().read_lock_manifest(&path).unwrap();

        assert_eq!(lock.name.as_deref(), Some("app"));
        assert_eq!(lock.lockfile_version, Some(1));
        assert_eq!(lock.dependencies.len(), 2);
        let lib = &lock.dependencies["lib"];
        assert_eq!(lib.version, "2.0.0");
        assert_eq!(lock.dependencies["mocha"].version, "10.2.0");
        assert!(!lock.dependencies.contains_key("inner"));
    }

    #[test]
    fn test_read_lock_manifest_v3_packages() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "package-lock.json",
            r#"{
                "name": "app",
                "version": "1.0.0",
                "lockfileVersion": 3,
                "packages": {
                    "": {"name": "app", "version": "1.0.0"},
                    "node_modules/lib": {"version": "2.0.0"},
                    "node_modules/@scope/pkg": {"version": "1.2.3", "optional": true},
                    "node_modules/lib/node_modules/util": {"version": "0.0.9"},
                    "node_modules/linked": {"resolved": "../linked", "link": true},
                    "packages/workspace-a": {"version": "0.1.0"}
                }
            }"#,
        );

        let lock = FileSystemReader::new().read_lock_manifest(&path).unwrap();

        let names: Vec<&str> = lock.dependencies.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["@scope/pkg", "lib"]);
        assert_eq!(lock.dependencies["@scope/pkg"].version, "1.2.3");
    }

    #[test]
    fn test_lock_dependencies_section_wins_over_packages() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "package-lock.json",
            r#"{
                "lockfileVersion": 2,
                "packages": {"node_modules/lib": {"version": "2.0.0"}, "node_modules/extra": {"version": "1.0.0"}},
                "dependencies": {"lib": {"version": "2.0.0"}}
            }"#,
        );

        let lock = FileSystemReader::new().read_lock_manifest(&path).unwrap();
        assert_eq!(lock.dependencies.len(), 1);
        assert!(lock.dependencies.contains_key("lib"));
    }

    #[test]
    fn test_read_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let licenses = write(
            &temp_dir,
            "licenses.json",
            r#"{
                "licenseListVersion": "3.24",
                "licenses": [
                    {"licenseId": "MIT", "name": "MIT License", "isOsiApproved": true},
                    {"licenseId": "Apache-2.0", "name": "Apache License 2.0"}
                ]
            }"#,
        );
        let exceptions = write(
            &temp_dir,
            "exceptions.json",
            r#"{"exceptions": [{"licenseExceptionId": "LLVM-exception", "name": "LLVM Exception"}]}"#,
        );

        let catalog = FileSystemReader::new()
            .read_catalog(&licenses, &exceptions)
            .unwrap();

        assert!(catalog.contains("MIT"));
        assert!(catalog.contains("Apache-2.0"));
        assert!(catalog.contains("LLVM-exception"));
        assert_eq!(catalog.license_list_version(), Some("3.24"));
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let licenses = write(&temp_dir, "licenses.json", r#"{"licenses": []}"#);
        let missing = temp_dir.path().join("exceptions.json");

        let err = FileSystemReader::new()
            .read_catalog(&licenses, &missing)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::CatalogLoadError { .. })
        ));
    }

    #[test]
    fn test_read_catalog_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let licenses = write(&temp_dir, "licenses.json", r#"{"licenses": "nope"}"#);
        let exceptions = write(&temp_dir, "exceptions.json", r#"{"exceptions": []}"#);

        let err = FileSystemReader::new()
            .read_catalog(&licenses, &exceptions)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load SPDX license list"));
    }

    #[test]
    fn test_top_level_package_name() {
        assert_eq!(
            FileSystemReader::top_level_package_name("node_modules/lib"),
            Some("lib")
        );
        assert_eq!(
            FileSystemReader::top_level_package_name("node_modules/@s/p"),
            Some("@s/p")
        );
        assert_eq!(FileSystemReader::top_level_package_name(""), None);
        assert_eq!(
            FileSystemReader::top_level_package_name("node_modules/a/node_modules/b"),
            None
        );
    }
}
