/// Mock implementations for testing
mod mock_license_data_source;
mod mock_license_storage;
mod mock_progress_reporter;
mod mock_sbom_reader;

pub use mock_license_data_source::MockLicenseDataSource;
pub use mock_license_storage::{InMemoryCustomLicenseStore, InMemoryLicenseTextCache};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_reader::MockSbomReader;
