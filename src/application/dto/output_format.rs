/// Output format enumeration for SPDX documents
///
/// Both the CLI and the formatter factory need to understand this value,
/// so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// SPDX 2.1 tag-value text (default)
    #[default]
    TagValue,
    /// SPDX JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tag-value" | "tagvalue" | "tv" => Ok(OutputFormat::TagValue),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'tag-value' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::TagValue => write!(f, "tag-value"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
