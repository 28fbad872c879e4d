use super::LicenseTextResolver;
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::license_resolution::domain::{
    CanonicalLicenseId, ReportProvenance, ResolvedLicenseText, SbomComponent,
};
use crate::license_resolution::services::{
    AggregatedComponents, ComponentAggregator, IgnoreRules, LicenseNormalizer, LicenseReport,
    ReportBuilder,
};
use crate::ports::outbound::{
    CustomLicenseStore, LicenseDataSource, LicenseTextCache, ProgressReporter, SbomReader,
};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::HashMap;

/// GenerateReportUseCase - Core use case for license report generation
///
/// Orchestrates the pipeline SBOM → normalize → aggregate → resolve texts →
/// build report, with every piece of infrastructure injected.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `S` - LicenseDataSource implementation
/// * `C` - LicenseTextCache implementation
/// * `K` - CustomLicenseStore implementation
/// * `P` - ProgressReporter implementation
pub struct GenerateReportUseCase<R, S, C, K, P> {
    sbom_reader: R,
    data_source: S,
    text_cache: C,
    custom_store: K,
    progress_reporter: P,
}

impl<R, S, C, K, P> GenerateReportUseCase<R, S, C, K, P>
where
    R: SbomReader,
    S: LicenseDataSource,
    C: LicenseTextCache,
    K: CustomLicenseStore,
    P: ProgressReporter,
{
    pub fn new(
        sbom_reader: R,
        data_source: S,
        text_cache: C,
        custom_store: K,
        progress_reporter: P,
    ) -> Self {
        Self {
            sbom_reader,
            data_source,
            text_cache,
            custom_store,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Fails before producing any output when the SBOM cannot be read, the
    /// overrides or ignore patterns are invalid, or the license name table
    /// cannot be loaded. Per-license problems never fail the run.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Load the SBOM
        let components = self.read_components(&request)?;

        // Step 2: Validate user-supplied rules before any network access
        let normalizer = Self::build_normalizer(&request.overrides)?;
        let ignore_rules = IgnoreRules::new(request.ignore_patterns.clone())?;

        // Step 3: Load the display name table
        let names = self.load_license_names().await?;

        // Step 4: Normalize and aggregate
        let aggregated = self.aggregate(&components, &normalizer, &ignore_rules);
        let unmatched_ignore_patterns = self.warn_unmatched_patterns(&ignore_rules);

        // Step 5: Resolve license texts
        let texts = self.resolve_texts(&aggregated, names).await;

        // Step 6: Assemble the report
        let provenance = ReportProvenance::now(self.data_source.license_list_version());
        let report = ReportBuilder::build(&aggregated, &texts, provenance);
        self.report_summary(&report);

        Ok(ReportResponse::new(report, unmatched_ignore_patterns))
    }

    fn read_components(&self, request: &ReportRequest) -> Result<Vec<SbomComponent>> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.sbom_path.display()
        ));

        let components = self.sbom_reader.read_components(&request.sbom_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", components.len()));

        Ok(components)
    }

    /// Validates the override map and builds the normalizer from it
    fn build_normalizer(overrides: &HashMap<String, String>) -> Result<LicenseNormalizer> {
        let mut mapped = HashMap::with_capacity(overrides.len());

        for (raw, id) in overrides {
            if raw.trim().is_empty() {
                return Err(ReportError::Validation {
                    message: "License override keys must not be empty".to_string(),
                }
                .into());
            }
            if id.trim().is_empty() {
                return Err(ReportError::Validation {
                    message: format!("License override for '{}' maps to an empty id", raw),
                }
                .into());
            }
            mapped.insert(raw.clone(), CanonicalLicenseId::new(id.trim()));
        }

        Ok(LicenseNormalizer::new(mapped))
    }

    async fn load_license_names(&self) -> Result<HashMap<String, String>> {
        self.progress_reporter.report(&format!(
            "📚 Loading SPDX license list ({})...",
            self.data_source.license_list_version()
        ));

        let names = self.data_source.fetch_license_names().await?;

        self.progress_reporter
            .report(&format!("   - {} license name(s) available", names.len()));

        Ok(names)
    }

    fn aggregate(
        &self,
        components: &[SbomComponent],
        normalizer: &LicenseNormalizer,
        ignore_rules: &IgnoreRules,
    ) -> AggregatedComponents {
        let normalized = components
            .iter()
            .map(|component| (component, normalizer.normalize(&component.licenses)));
        let aggregated = ComponentAggregator::aggregate(normalized, ignore_rules);

        let ignored = components
            .iter()
            .filter(|c| ignore_rules.is_ignored(&c.identity_key()))
            .count();
        if ignored > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} component entr{} based on ignore patterns",
                ignored,
                if ignored == 1 { "y" } else { "ies" }
            ));
        }

        self.progress_reporter.report(&format!(
            "📊 Aggregated {} package(s) under {} license(s)",
            aggregated.by_package().len(),
            aggregated.by_license().len()
        ));

        aggregated
    }

    fn warn_unmatched_patterns(&self, ignore_rules: &IgnoreRules) -> Vec<String> {
        let unmatched = ignore_rules.unmatched_patterns();
        for pattern in &unmatched {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Ignore pattern '{}' did not match any component.",
                pattern
            ));
        }
        unmatched
    }

    async fn resolve_texts(
        &self,
        aggregated: &AggregatedComponents,
        names: HashMap<String, String>,
    ) -> HashMap<CanonicalLicenseId, ResolvedLicenseText> {
        let ids = aggregated.license_ids();
        if ids.is_empty() {
            return HashMap::new();
        }

        self.progress_reporter
            .report(&format!("🔍 Resolving {} license text(s)...", ids.len()));

        let resolver =
            LicenseTextResolver::new(&self.data_source, &self.text_cache, &self.custom_store, names);
        let texts = resolver.resolve_all(&ids, &self.progress_reporter).await;

        for warning in resolver.take_warnings() {
            self.progress_reporter.report_error(&warning);
        }

        texts
    }

    fn report_summary(&self, report: &LicenseReport) {
        let unavailable: Vec<&str> = report
            .licenses
            .iter()
            .filter(|record| record.has_diagnostic_text())
            .map(|record| record.id().as_str())
            .collect();

        if !unavailable.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: License text unavailable for: {}",
                unavailable.join(", ")
            ));
        }

        if report.has_unknown_licenses() {
            let ids: Vec<&str> = report.unknown_licenses.iter().map(|id| id.as_str()).collect();
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} license declaration(s) could not be recognized: {}",
                ids.len(),
                ids.join(", ")
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ License report complete: {} license(s), {} notice(s)",
            report.licenses.len(),
            report.notices.len()
        ));
    }
}
