use crate::application::read_models::LicenseReportModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the license report
pub trait ReportFormatter {
    /// Renders the report model into the output document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &LicenseReportModel) -> Result<String>;
}
