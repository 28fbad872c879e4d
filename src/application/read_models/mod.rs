//! Read models for the rendered report
//!
//! View structs flatten the domain report into the shape formatters consume.
//! They derive `Serialize`, so the JSON output is exactly this model.

mod component_view;
mod license_report_model;
mod license_report_model_builder;

pub use component_view::ComponentView;
pub use license_report_model::{
    LicenseReportModel, LicenseView, OverviewView, ReportMetadataView,
};
pub use license_report_model_builder::LicenseReportModelBuilder;
