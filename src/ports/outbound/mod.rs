/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod formatter;
pub mod license_list_reader;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_client;
pub mod results_store;

pub use formatter::{ReportFormatter, SbomFormatter};
pub use license_list_reader::LicenseListReader;
pub use manifest_reader::{LockDependency, ManifestReader, PackageLockManifest, PackageManifest};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_client::{RegistryClient, RegistryVersion};
pub use results_store::ResultsStore;
