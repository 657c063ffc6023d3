use crate::adapters::outbound::formatters::{SpdxJsonFormatter, TagValueFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SPDX formatters
///
/// Encapsulates the choice of formatter adapter for an output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::dto::OutputFormat;
    /// use npm_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::TagValue);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::TagValue => Box::new(TagValueFormatter::new()),
            OutputFormat::Json => Box::new(SpdxJsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::dto::OutputFormat;
    /// use npm_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating SPDX JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::TagValue => "📝 Generating SPDX tag-value output...",
            OutputFormat::Json => "📝 Generating SPDX JSON output...",
        }
    }
}
