use crate::application::dto::{RetrieveRequest, RetrieveResponse};
use crate::ports::outbound::{
    ManifestReader, PackageLockManifest, PackageManifest, ProgressReporter, RegistryClient,
    RegistryVersion, ResultsStore,
};
use crate::sbom_generation::domain::{DependencyGraph, DependencyNode, RootPackage, NOASSERTION};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// RetrieveDependenciesUseCase - Builds the dependency graph of an npm project
///
/// Reads package.json and package-lock.json, asks the registry about every
/// installed package in name order, and persists the resulting graph.
///
/// # Type Parameters
/// * `M` - ManifestReader implementation
/// * `C` - RegistryClient implementation
/// * `S` - ResultsStore implementation
/// * `P` - ProgressReporter implementation
pub struct RetrieveDependenciesUseCase<M, C, S, P> {
    manifest_reader: M,
    registry_client: C,
    results_store: S,
    progress_reporter: P,
}

impl<M, C, S, P> RetrieveDependenciesUseCase<M, C, S, P>
where
    M: ManifestReader,
    C: RegistryClient,
    S: ResultsStore,
    P: ProgressReporter,
{
    pub fn new(manifest_reader: M, registry_client: C, results_store: S, progress_reporter: P) -> Self {
        Self {
            manifest_reader,
            registry_client,
            results_store,
            progress_reporter,
        }
    }

    /// Executes the retrieval
    ///
    /// # Errors
    /// Fails on unreadable manifests, a missing root name or version, the
    /// first registry failure, a duplicated package, or a failed write.
    pub async fn execute(&self, request: RetrieveRequest) -> Result<RetrieveResponse> {
        let (manifest, lock) = self.read_manifests(&request)?;
        let root = Self::root_package(&manifest, &lock)?;

        let graph = self.query_registry(root, &manifest, &lock, &request).await?;

        self.results_store.save(&graph, &request.results_json)?;
        self.progress_reporter.report_completion(&format!(
            "✅ Retrieved {} package(s) ({} direct, {} direct dev) into {}",
            graph.total_package_count(),
            graph.direct_dependency_count(),
            graph.direct_dev_dependency_count(),
            request.results_json.display()
        ));

        Ok(RetrieveResponse::new(graph))
    }

    fn read_manifests(
        &self,
        request: &RetrieveRequest,
    ) -> Result<(PackageManifest, PackageLockManifest)> {
        self.progress_reporter.report(&format!(
            "📖 Loading package.json from: {}",
            request.package_json.display()
        ));
        let manifest = self.manifest_reader.read_manifest(&request.package_json)?;

        self.progress_reporter.report(&format!(
            "📖 Loading package-lock.json from: {}",
            request.package_lock_json.display()
        ));
        let lock = self
            .manifest_reader
            .read_lock_manifest(&request.package_lock_json)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} installed package(s)",
            lock.dependencies.len()
        ));

        Ok((manifest, lock))
    }

    /// The root identity comes from package.json, with the lock file
    /// filling in a missing name or version.
    fn root_package(manifest: &PackageManifest, lock: &PackageLockManifest) -> Result<RootPackage> {
        let name = manifest
            .name
            .clone()
            .or_else(|| lock.name.clone())
            .ok_or_else(|| SbomError::Validation {
                message: "package.json has no 'name' and package-lock.json does not provide one"
                    .to_string(),
            })?;
        let version = manifest
            .version
            .clone()
            .or_else(|| lock.version.clone())
            .ok_or_else(|| SbomError::Validation {
                message: format!(
                    "package '{}' has no 'version' in package.json or package-lock.json",
                    name
                ),
            })?;
        let license = manifest
            .license
            .clone()
            .unwrap_or_else(|| NOASSERTION.to_string());

        RootPackage::new(name, version, license)
    }

    async fn query_registry(
        &self,
        root: RootPackage,
        manifest: &PackageManifest,
        lock: &PackageLockManifest,
        request: &RetrieveRequest,
    ) -> Result<DependencyGraph> {
        self.progress_reporter
            .report("🔍 Fetching package metadata from the npm registry...");

        let total = lock.dependencies.len();
        let mut graph = DependencyGraph::new(root);

        for (index, (name, locked)) in lock.dependencies.iter().enumerate() {
            if index > 0 && !request.request_delay.is_zero() {
                tokio::time::sleep(request.request_delay).await;
            }

            let label = format!("{}@{}", name, locked.version);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&label));

            let fetched = self
                .registry_client
                .fetch_version(name, &locked.version)
                .await?;
            graph.insert(Self::to_node(fetched, manifest)?)?;
        }

        Ok(graph)
    }

    fn to_node(fetched: RegistryVersion, manifest: &PackageManifest) -> Result<DependencyNode> {
        let is_direct = manifest.is_direct_dependency(&fetched.name);
        let is_direct_dev = manifest.is_direct_dev_dependency(&fetched.name);
        let license = fetched.license.unwrap_or_else(|| NOASSERTION.to_string());

        Ok(DependencyNode::new(fetched.name, fetched.version, license)?
            .with_dependencies(fetched.dependencies)
            .with_dev_dependencies(fetched.dev_dependencies)
            .direct(is_direct)
            .direct_dev(is_direct_dev))
    }
}
