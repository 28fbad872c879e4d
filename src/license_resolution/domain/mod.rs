mod component;
mod expression;
mod license_declaration;
mod license_id;
mod license_record;
mod report_provenance;

pub use component::{Component, SbomComponent};
pub use expression::ExpressionNode;
pub use license_declaration::RawLicenseDeclaration;
pub use license_id::{CanonicalLicenseId, CUSTOM_LICENSE_PREFIX, UNKNOWN_LICENSE_PREFIX};
pub use license_record::{
    is_diagnostic_text, LicenseRecord, ResolvedLicenseText, TextOrigin, DIAGNOSTIC_MARKER,
};
pub use report_provenance::ReportProvenance;
