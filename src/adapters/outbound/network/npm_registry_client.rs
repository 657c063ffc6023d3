use crate::adapters::outbound::license_field::normalize_license_field;
use crate::ports::outbound::{RegistryClient, RegistryVersion};
use crate::sbom_generation::domain::RequirementMap;
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

#[derive(Debug, Deserialize)]
struct VersionDocument {
    name: String,
    version: String,
    #[serde(default)]
    license: Option<Value>,
    /// Pre-2015 packages list licenses as an array of objects
    #[serde(default)]
    licenses: Option<Vec<Value>>,
    #[serde(default)]
    dependencies: Option<RequirementMap>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<RequirementMap>,
}

impl From<VersionDocument> for RegistryVersion {
    fn from(doc: VersionDocument) -> Self {
        let license = doc
            .license
            .as_ref()
            .and_then(normalize_license_field)
            .or_else(|| {
                doc.licenses
                    .as_ref()
                    .and_then(|all| all.first())
                    .and_then(normalize_license_field)
            });

        Self {
            name: doc.name,
            version: doc.version,
            license,
            dependencies: doc.dependencies.unwrap_or_default(),
            dev_dependencies: doc.dev_dependencies.unwrap_or_default(),
        }
    }
}

/// All published versions of a package, left undecoded so malformed
/// metadata on unrelated versions does not matter
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(default)]
    versions: BTreeMap<String, Value>,
}

/// NpmRegistryClient adapter for fetching version metadata from the npm registry
///
/// This adapter implements the RegistryClient port over the registry's JSON
/// API. Requests are not retried: any transport, status or decoding failure
/// is returned immediately as a `RegistryFetchError`.
///
/// Scoped packages (`@scope/name`) cannot be fetched per version, so their
/// full document is fetched and the version picked out of it.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistryClient {
    /// Creates a client for the public npm registry
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Creates a client for the registry at `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let user_agent = format!("npm-sbom/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rejects components that could change the shape of the request URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("{} is empty", component_type);
        }

        if component.contains('\\') || component.contains("..") {
            anyhow::bail!(
                "Security: {} contains path traversal characters",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// `{registry}/{name}/{version}`
    fn version_url(&self, package_name: &str, version: &str) -> Result<String> {
        if package_name.contains('/') {
            anyhow::bail!("Security: unscoped package name contains '/'");
        }
        if version.contains('/') {
            anyhow::bail!("Security: version contains '/'");
        }
        Ok(format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(package_name),
            urlencoding::encode(version)
        ))
    }

    /// `{registry}/@scope%2Fname`
    fn packument_url(&self, package_name: &str) -> Result<String> {
        let unscoped = package_name
            .strip_prefix('@')
            .ok_or_else(|| anyhow::anyhow!("'{}' is not a scoped package", package_name))?;
        Ok(format!(
            "{}/@{}",
            self.base_url,
            urlencoding::encode(unscoped)
        ))
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("npm registry returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }

    fn decode_version(document: Value) -> Result<RegistryVersion> {
        let doc: VersionDocument = serde_json::from_value(document)
            .map_err(|e| anyhow::anyhow!("Failed to decode version metadata: {}", e))?;
        Ok(doc.into())
    }

    fn select_version(packument: Value, version: &str) -> Result<RegistryVersion> {
        let mut packument: Packument = serde_json::from_value(packument)
            .map_err(|e| anyhow::anyhow!("Failed to decode package metadata: {}", e))?;

        let document = packument
            .versions
            .remove(version)
            .ok_or_else(|| anyhow::anyhow!("version {} not found", version))?;

        Self::decode_version(document)
    }

    async fn fetch(&self, package_name: &str, version: &str) -> Result<RegistryVersion> {
        Self::validate_url_component(package_name, "Package name")?;
        Self::validate_url_component(version, "Version")?;

        if package_name.starts_with('@') {
            let packument = self.get_json(&self.packument_url(package_name)?).await?;
            Self::select_version(packument, version)
        } else {
            let document = self
                .get_json(&self.version_url(package_name, version)?)
                .await?;
            Self::decode_version(document)
        }
    }
}

#[async_trait]
impl RegistryClient for NpmRegistryClient {
    async fn fetch_version(&self, package_name: &str, version: &str) -> Result<RegistryVersion> {
        self.fetch(package_name, version).await.map_err(|e| {
            SbomError::RegistryFetchError {
                package_name: package_name.to_string(),
                version: version.to_string(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
