use super::AggregatedComponents;
use crate::license_resolution::domain::{
    CanonicalLicenseId, Component, LicenseRecord, ReportProvenance, ResolvedLicenseText, TextOrigin,
    DIAGNOSTIC_MARKER,
};
use std::collections::HashMap;

/// One row of the license overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewEntry {
    pub id: CanonicalLicenseId,
    pub name: String,
    pub count: usize,
}

/// LicenseReport - the aggregated model handed to formatters
#[derive(Debug, Clone)]
pub struct LicenseReport {
    /// License usage, most used first, ties by ascending id
    pub overview: Vec<OverviewEntry>,
    /// Licenses with text and referencing components, ascending by id
    pub licenses: Vec<LicenseRecord>,
    /// Components with a copyright statement, by name and version
    pub notices: Vec<Component>,
    /// Placeholder ids synthesized for unrecognized license expressions
    pub unknown_licenses: Vec<CanonicalLicenseId>,
    pub provenance: ReportProvenance,
}

impl LicenseReport {
    /// Whether any license expression could not be recognized
    pub fn has_unknown_licenses(&self) -> bool {
        !self.unknown_licenses.is_empty()
    }
}

/// ReportBuilder service assembling the final report model
///
/// Pure: resolved texts are passed in, so the order in which they were
/// resolved has no influence on the output.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds the report from the aggregated indices and resolved texts
    ///
    /// Ids missing from `texts` fall back to the id as name and a diagnostic text.
    pub fn build(
        aggregated: &AggregatedComponents,
        texts: &HashMap<CanonicalLicenseId, ResolvedLicenseText>,
        provenance: ReportProvenance,
    ) -> LicenseReport {
        let display_name = |id: &CanonicalLicenseId| {
            texts
                .get(id)
                .map(|t| t.name().to_string())
                .unwrap_or_else(|| id.to_string())
        };

        let overview = aggregated
            .license_ranking()
            .into_iter()
            .map(|(id, count)| OverviewEntry {
                name: display_name(&id),
                id,
                count,
            })
            .collect();

        let licenses = aggregated
            .by_license()
            .iter()
            .map(|(id, components)| {
                let resolved = texts
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| Self::unresolved_text(id));
                LicenseRecord::new(id.clone(), resolved, components.clone())
            })
            .collect();

        let mut notices: Vec<Component> = aggregated
            .by_package()
            .values()
            .filter(|c| !c.copyright().trim().is_empty())
            .cloned()
            .collect();
        notices.sort_by(|a, b| a.cmp_by_name_version(b));

        let unknown_licenses = aggregated
            .by_license()
            .keys()
            .filter(|id| id.is_unknown())
            .cloned()
            .collect();

        LicenseReport {
            overview,
            licenses,
            notices,
            unknown_licenses,
            provenance,
        }
    }

    fn unresolved_text(id: &CanonicalLicenseId) -> ResolvedLicenseText {
        ResolvedLicenseText::new(
            id.to_string(),
            format!("{} No license text was resolved for {}.", DIAGNOSTIC_MARKER, id),
            TextOrigin::Unresolved,
        )
    }
}
