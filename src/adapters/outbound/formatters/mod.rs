/// Formatter adapters for the supported output formats
mod license_report_formatter;
mod spdx_json_formatter;
mod tag_value_formatter;

pub use license_report_formatter::JsonReportFormatter;
pub use spdx_json_formatter::SpdxJsonFormatter;
pub use tag_value_formatter::TagValueFormatter;
