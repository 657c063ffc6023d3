use crate::sbom_generation::domain::RequirementMap;
use crate::shared::Result;
use async_trait::async_trait;

/// Metadata the registry publishes for one package version
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryVersion {
    pub name: String,
    pub version: String,
    /// Declared license, already reduced to a plain string
    pub license: Option<String>,
    pub dependencies: RequirementMap,
    pub dev_dependencies: RequirementMap,
}

/// RegistryClient port for fetching published package metadata
///
/// This port abstracts the external data source (e.g., the npm registry)
/// used to look up the license and requirements of an installed version.
///
/// # Async Support
/// Implementations must be `Send + Sync` so they can be shared and wrapped
/// by caching decorators.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches metadata for a specific package version
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The registry returns an error status code
    /// - The response cannot be decoded, or does not list `version`
    async fn fetch_version(&self, package_name: &str, version: &str) -> Result<RegistryVersion>;
}
