//! Configuration file support for npm-sbom.
//!
//! Provides YAML-based configuration through `npm-sbom.config.yml` files,
//! and the merge of file values with command-line flags.

use anyhow::{bail, Context};
use npm_sbom::adapters::outbound::network::DEFAULT_REGISTRY_URL;
use npm_sbom::application::dto::OutputFormat;
use npm_sbom::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "npm-sbom.config.yml";

const DEFAULT_LICENSE_LIST: &str = "data/licenses.json";
const DEFAULT_EXCEPTION_LIST: &str = "data/exceptions.json";
const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub license_list: Option<PathBuf>,
    pub exception_list: Option<PathBuf>,
    pub request_delay_ms: Option<u64>,
    pub registry_url: Option<String>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line. Each one, when present, wins over the
/// config file.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub license_list: Option<PathBuf>,
    pub exception_list: Option<PathBuf>,
    pub request_delay_ms: Option<u64>,
    pub registry_url: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Effective settings after merging flags, file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub license_list: PathBuf,
    pub exception_list: PathBuf,
    pub request_delay: Duration,
    pub registry_url: String,
    pub format: OutputFormat,
}

impl Settings {
    /// Merges command-line flags over the config file over built-in defaults.
    pub fn resolve(cli: CliOverrides, file: ConfigFile) -> Result<Self> {
        let format = match (cli.format, file.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => parse_format(raw)?,
            (None, None) => OutputFormat::default(),
        };

        let settings = Self {
            license_list: cli
                .license_list
                .or(file.license_list)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LICENSE_LIST)),
            exception_list: cli
                .exception_list
                .or(file.exception_list)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXCEPTION_LIST)),
            request_delay: Duration::from_millis(
                cli.request_delay_ms
                    .or(file.request_delay_ms)
                    .unwrap_or(DEFAULT_REQUEST_DELAY_MS),
            ),
            registry_url: cli
                .registry_url
                .or(file.registry_url)
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            format,
        };

        validate_registry_url(&settings.registry_url)?;
        Ok(settings)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (key, path) in [
        ("license_list", &config.license_list),
        ("exception_list", &config.exception_list),
    ] {
        if let Some(path) = path {
            if path.as_os_str().is_empty() {
                bail!(
                    "Invalid config: {} must not be empty.\n\n\
                     💡 Hint: Point it at a file from the spdx/license-list-data repository.",
                    key
                );
            }
        }
    }

    if let Some(url) = &config.registry_url {
        validate_registry_url(url)?;
    }

    if let Some(format) = &config.format {
        parse_format(format)?;
    }

    Ok(())
}

fn validate_registry_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        bail!(
            "Invalid registry URL: '{}'.\n\n💡 Hint: The registry URL must start with http:// or https://",
            url
        );
    }
    Ok(())
}

fn parse_format(raw: &str) -> Result<OutputFormat> {
    raw.parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
