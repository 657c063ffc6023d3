use clap::{Parser, Subcommand};
use npm_sbom::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate SPDX SBOMs and license summaries for npm projects
#[derive(Parser, Debug)]
#[command(name = "npm-sbom")]
#[command(version)]
#[command(
    about = "Generate SPDX SBOMs and license summaries for npm projects",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./npm-sbom.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SPDX license-list-data licenses.json
    #[arg(long, global = true, value_name = "PATH")]
    pub license_list: Option<PathBuf>,

    /// SPDX license-list-data exceptions.json
    #[arg(long, global = true, value_name = "PATH")]
    pub exception_list: Option<PathBuf>,

    /// Delay between npm registry requests, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Base URL of the npm registry
    #[arg(long, global = true, value_name = "URL")]
    pub registry_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query the registry for every installed package and save the dependency graph
    Retrieve {
        /// The project's package.json
        package_json: PathBuf,
        /// The project's package-lock.json
        package_lock_json: PathBuf,
        /// Where to write the retrieved results
        results_json: PathBuf,
    },
    /// Summarize retrieved dependencies by license
    Report {
        /// Results written by `retrieve`
        results_json: PathBuf,
        /// Where to write the summary (`-` for stdout)
        summary_json: PathBuf,
    },
    /// Write an SPDX document for retrieved dependencies
    Spdx {
        /// Results written by `retrieve`
        results_json: PathBuf,
        /// Where to write the document (`-` for stdout)
        output_spdx: PathBuf,
        /// Output format: tag-value or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

impl Args {
    pub fn format_override(&self) -> Option<OutputFormat> {
        match self.command {
            Command::Spdx { format, .. } => format,
            _ => None,
        }
    }
}
