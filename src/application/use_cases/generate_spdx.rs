use crate::application::dto::{SpdxRequest, SpdxResponse};
use crate::ports::outbound::{LicenseListReader, ProgressReporter, ResultsStore};
use crate::sbom_generation::services::DocumentAssembler;
use crate::shared::Result;

/// GenerateSpdxUseCase - Turns a results file into an SPDX document
///
/// Loads the SPDX license catalog and a previously retrieved dependency
/// graph, then reconciles licenses and assembles the document. Formatting is
/// left to the caller.
pub struct GenerateSpdxUseCase<L, S, P> {
    license_list_reader: L,
    results_store: S,
    progress_reporter: P,
}

impl<L, S, P> GenerateSpdxUseCase<L, S, P>
where
    L: LicenseListReader,
    S: ResultsStore,
    P: ProgressReporter,
{
    pub fn new(license_list_reader: L, results_store: S, progress_reporter: P) -> Self {
        Self {
            license_list_reader,
            results_store,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: SpdxRequest) -> Result<SpdxResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading SPDX license list from: {}",
            request.license_list.display()
        ));
        let catalog = self
            .license_list_reader
            .read_catalog(&request.license_list, &request.exception_list)?;

        self.progress_reporter.report(&format!(
            "📖 Loading results from: {}",
            request.results_json.display()
        ));
        let graph = self.results_store.load(&request.results_json)?;

        let document = DocumentAssembler::assemble(&graph, &catalog);

        let extracted = document.extracted_licenses().len();
        if extracted > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} license(s) are not on the SPDX License List and were recorded as LicenseRefs",
                extracted
            ));
        }
        self.progress_reporter.report(&format!(
            "✅ Assembled SPDX document with {} package(s) and {} relationship(s)",
            document.packages().len(),
            document.relationships().len()
        ));

        Ok(SpdxResponse { document })
    }
}
