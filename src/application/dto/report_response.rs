use crate::license_resolution::services::LicenseReport;

/// ReportResponse - Output of the report generation use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub report: LicenseReport,
    /// Ignore patterns that did not match any component
    pub unmatched_ignore_patterns: Vec<String>,
}

impl ReportResponse {
    pub fn new(report: LicenseReport, unmatched_ignore_patterns: Vec<String>) -> Self {
        Self {
            report,
            unmatched_ignore_patterns,
        }
    }

    /// Drives the exit status: true when any placeholder id was synthesized
    pub fn has_unknown_licenses(&self) -> bool {
        self.report.has_unknown_licenses()
    }
}
