/// Data Transfer Objects for the application layer
///
/// DTOs carry data between adapters and use cases, keeping the domain
/// layer free of CLI and configuration concerns.
mod output_format;
mod report_request;
mod report_response;

pub use output_format::OutputFormat;
pub use report_request::ReportRequest;
pub use report_response::ReportResponse;
