/// Outbound ports (driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside
/// world: the SBOM, the license list, text storage, and the console.
pub mod custom_license_store;
pub mod formatter;
pub mod license_data_source;
pub mod license_text_cache;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;

pub use custom_license_store::CustomLicenseStore;
pub use formatter::ReportFormatter;
pub use license_data_source::LicenseDataSource;
pub use license_text_cache::LicenseTextCache;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::SbomReader;
