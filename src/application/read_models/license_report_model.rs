//! License report read model

use super::component_view::ComponentView;
use serde::Serialize;

/// Query-optimized view of a finished license report
#[derive(Debug, Clone, Serialize)]
pub struct LicenseReportModel {
    pub metadata: ReportMetadataView,
    pub overview: Vec<OverviewView>,
    pub licenses: Vec<LicenseView>,
    pub notices: Vec<ComponentView>,
    pub unknown_licenses: Vec<String>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub license_list_version: String,
}

/// One license in the overview table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewView {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// One license section
#[derive(Debug, Clone, Serialize)]
pub struct LicenseView {
    pub id: String,
    pub name: String,
    pub text: String,
    /// False when `text` is a diagnostic placeholder
    pub text_available: bool,
    pub components: Vec<ComponentView>,
}
