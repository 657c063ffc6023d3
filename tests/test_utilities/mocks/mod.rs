/// Mock implementations for testing
mod mock_license_list_reader;
mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_registry_client;
mod mock_results_store;

pub use mock_license_list_reader::MockLicenseListReader;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_registry_client::MockRegistryClient;
pub use mock_results_store::MockResultsStore;
