//! Builder turning the domain report into the read model

use super::component_view::ComponentView;
use super::license_report_model::{
    LicenseReportModel, LicenseView, OverviewView, ReportMetadataView,
};
use crate::license_resolution::domain::{Component, LicenseRecord, ReportProvenance};
use crate::license_resolution::services::LicenseReport;
use chrono::SecondsFormat;

/// Builder for constructing LicenseReportModel from the domain report
pub struct LicenseReportModelBuilder;

impl LicenseReportModelBuilder {
    pub fn build(report: &LicenseReport) -> LicenseReportModel {
        LicenseReportModel {
            metadata: Self::build_metadata(&report.provenance),
            overview: report
                .overview
                .iter()
                .map(|entry| OverviewView {
                    id: entry.id.to_string(),
                    name: entry.name.clone(),
                    count: entry.count,
                })
                .collect(),
            licenses: report.licenses.iter().map(Self::build_license).collect(),
            notices: report.notices.iter().map(Self::build_component).collect(),
            unknown_licenses: report
                .unknown_licenses
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }

    fn build_metadata(provenance: &ReportProvenance) -> ReportMetadataView {
        ReportMetadataView {
            generated_at: provenance
                .generated_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            tool_name: ReportProvenance::TOOL_NAME.to_string(),
            tool_version: ReportProvenance::TOOL_VERSION.to_string(),
            license_list_version: provenance.license_list_version().to_string(),
        }
    }

    fn build_license(record: &LicenseRecord) -> LicenseView {
        LicenseView {
            id: record.id().to_string(),
            name: record.name().to_string(),
            text: record.text().to_string(),
            text_available: !record.has_diagnostic_text(),
            components: record
                .components()
                .iter()
                .map(Self::build_component)
                .collect(),
        }
    }

    fn build_component(component: &Component) -> ComponentView {
        ComponentView {
            name: component.name().to_string(),
            version: component.version().to_string(),
            purl: component.purl().to_string(),
            homepage: component.homepage().map(str::to_string),
            licenses: component.licenses().iter().map(|id| id.to_string()).collect(),
            copyright: component.copyright().to_string(),
        }
    }
}
