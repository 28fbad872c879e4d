use chrono::{DateTime, Utc};

/// When a report was built and which license list its names and texts came from
///
/// The tool identity is fixed at compile time and not stored per report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportProvenance {
    generated_at: DateTime<Utc>,
    license_list_version: String,
}

impl ReportProvenance {
    pub const TOOL_NAME: &'static str = env!("CARGO_PKG_NAME");
    pub const TOOL_VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Provenance stamped with the current time
    pub fn now(license_list_version: impl Into<String>) -> Self {
        Self::at(Utc::now(), license_list_version)
    }

    pub fn at(generated_at: DateTime<Utc>, license_list_version: impl Into<String>) -> Self {
        Self {
            generated_at,
            license_list_version: license_list_version.into(),
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn license_list_version(&self) -> &str {
        &self.license_list_version
    }
}
