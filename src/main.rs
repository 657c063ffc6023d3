mod cli;
mod config;

use clap::Parser;
use cli::{Args, Command};
use config::{CliOverrides, ConfigFile, Settings};
use npm_sbom::adapters::outbound::console::StderrProgressReporter;
use npm_sbom::adapters::outbound::filesystem::{FileSystemReader, JsonResultsStore};
use npm_sbom::adapters::outbound::formatters::JsonReportFormatter;
use npm_sbom::adapters::outbound::network::{CachingRegistryClient, NpmRegistryClient};
use npm_sbom::application::dto::{ReportRequest, RetrieveRequest, SpdxRequest};
use npm_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use npm_sbom::application::use_cases::{
    GenerateSpdxUseCase, RetrieveDependenciesUseCase, SummarizeLicensesUseCase,
};
use npm_sbom::ports::outbound::ReportFormatter;
use npm_sbom::shared::error::ExitCode;
use npm_sbom::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let overrides = CliOverrides {
        license_list: args.license_list.clone(),
        exception_list: args.exception_list.clone(),
        request_delay_ms: args.delay_ms,
        registry_url: args.registry_url.clone(),
        format: args.format_override(),
    };
    let settings = Settings::resolve(overrides, config)?;

    match args.command {
        Command::Retrieve {
            package_json,
            package_lock_json,
            results_json,
        } => {
            retrieve(
                &settings,
                RetrieveRequest::new(
                    package_json,
                    package_lock_json,
                    results_json,
                    settings.request_delay,
                ),
            )
            .await
        }
        Command::Report {
            results_json,
            summary_json,
        } => report(&settings, results_json, &summary_json),
        Command::Spdx {
            results_json,
            output_spdx,
            ..
        } => spdx(&settings, results_json, &output_spdx),
    }
}

/// Uses `--config` when given, otherwise the config file in the working
/// directory if there is one.
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Ok(config)
        }
        None => match config::discover_config(Path::new("."))? {
            Some(config) => {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
                Ok(config)
            }
            None => Ok(ConfigFile::default()),
        },
    }
}

async fn retrieve(settings: &Settings, request: RetrieveRequest) -> Result<()> {
    let registry_client =
        CachingRegistryClient::new(NpmRegistryClient::with_base_url(&settings.registry_url)?);

    let use_case = RetrieveDependenciesUseCase::new(
        FileSystemReader::new(),
        registry_client,
        JsonResultsStore::new(),
        StderrProgressReporter::new(),
    );

    use_case.execute(request).await?;
    Ok(())
}

fn report(settings: &Settings, results_json: PathBuf, summary_json: &Path) -> Result<()> {
    let use_case = SummarizeLicensesUseCase::new(
        FileSystemReader::new(),
        JsonResultsStore::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(ReportRequest::new(
        results_json,
        settings.license_list.clone(),
        settings.exception_list.clone(),
    ))?;

    let output = JsonReportFormatter::new().format(&response.report)?;
    PresenterFactory::create(PresenterType::for_destination(summary_json)).present(&output)
}

fn spdx(settings: &Settings, results_json: PathBuf, output_spdx: &Path) -> Result<()> {
    let use_case = GenerateSpdxUseCase::new(
        FileSystemReader::new(),
        JsonResultsStore::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(SpdxRequest::new(
        results_json,
        settings.license_list.clone(),
        settings.exception_list.clone(),
    ))?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let output = FormatterFactory::create(settings.format).format(&response.document)?;
    PresenterFactory::create(PresenterType::for_destination(output_spdx)).present(&output)
}
