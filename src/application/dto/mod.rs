/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod report_request;
mod retrieve_request;
mod retrieve_response;
mod spdx_request;

pub use output_format::OutputFormat;
pub use report_request::{ReportRequest, ReportResponse};
pub use retrieve_request::RetrieveRequest;
pub use retrieve_response::RetrieveResponse;
pub use spdx_request::{SpdxRequest, SpdxResponse};
