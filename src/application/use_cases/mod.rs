/// Use cases module containing application workflow orchestration
mod generate_report;
mod resolve_license_texts;

pub use generate_report::GenerateReportUseCase;
pub use resolve_license_texts::{LicenseTextResolver, MAX_CONCURRENT_FETCHES};
