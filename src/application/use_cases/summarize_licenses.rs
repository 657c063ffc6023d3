use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::{LicenseListReader, ProgressReporter, ResultsStore};
use crate::sbom_generation::services::LicenseReportBuilder;
use crate::shared::Result;

/// SummarizeLicensesUseCase - Groups retrieved dependencies by license
pub struct SummarizeLicensesUseCase<L, S, P> {
    license_list_reader: L,
    results_store: S,
    progress_reporter: P,
}

impl<L, S, P> SummarizeLicensesUseCase<L, S, P>
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

    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let catalog = self
            .license_list_reader
            .read_catalog(&request.license_list, &request.exception_list)?;
        let graph = self.results_store.load(&request.results_json)?;

        let report = LicenseReportBuilder::build(&graph, &catalog);

        self.progress_reporter.report(&format!(
            "📊 {} dependencies under {} license(s), {} not on the SPDX License List",
            report.total_dependencies(),
            report.groups.len(),
            report.invalid_group_count()
        ));

        Ok(ReportResponse { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{
        DependencyGraph, DependencyNode, LicenseCatalog, RootPackage,
    };
    use crate::shared::error::SbomError;
    use std::path::{Path, PathBuf};

    struct StubCatalogReader;

    impl LicenseListReader for StubCatalogReader {
        fn read_catalog(&self, _license_list: &Path, _exception_list: &Path) -> Result<LicenseCatalog> {
            Ok(LicenseCatalog::new(vec!["MIT".to_string()], Vec::<String>::new()))
        }
    }

    struct StubResultsStore {
        graph: Option<DependencyGraph>,
    }

    impl ResultsStore for StubResultsStore {
        fn save(&self, _graph: &DependencyGraph, _path: &Path) -> Result<()> {
            Ok(())
        }

        fn load(&self, path: &Path) -> Result<DependencyGraph> {
            self.graph.clone().ok_or_else(|| {
                SbomError::ResultsLoadError {
                    path: path.to_path_buf(),
                    details: "missing".to_string(),
                }
                .into()
            })
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn graph() -> DependencyGraph {
        let root =
            RootPackage::new("app".to_string(), "1.0.0".to_string(), "MIT".to_string()).unwrap();
        let mut graph = DependencyGraph::new(root);
        for (name, license) in [("a", "MIT"), ("b", "Custom"), ("c", "MIT")] {
            graph
                .insert(
                    DependencyNode::new(name.to_string(), "1.0.0".to_string(), license.to_string())
                        .unwrap(),
                )
                .unwrap();
        }
        graph
    }

    fn request() -> ReportRequest {
        ReportRequest::new(
            PathBuf::from("results.json"),
            PathBuf::from("licenses.json"),
            PathBuf::from("exceptions.json"),
        )
    }

    #[test]
    fn test_summarize_groups_by_license() {
        let use_case = SummarizeLicensesUseCase::new(
            StubCatalogReader,
            StubResultsStore {
                graph: Some(graph()),
            },
            SilentReporter,
        );

        let report = use_case.execute(request()).unwrap().report;

        let ids: Vec<&str> = report.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["LicenseRef-Custom", "MIT"]);
        assert_eq!(report.total_dependencies(), 3);
        assert_eq!(report.invalid_group_count(), 1);
    }

    #[test]
    fn test_summarize_missing_results_fails() {
        let use_case = SummarizeLicensesUseCase::new(
            StubCatalogReader,
            StubResultsStore { graph: None },
            SilentReporter,
        );

        let err = use_case.execute(request()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ResultsLoadError { .. })
        ));
    }
}
