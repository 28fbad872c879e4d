mod component_aggregator;
mod ignore_rules;
mod license_normalizer;
mod package_url_resolver;
mod report_builder;

pub use component_aggregator::{AggregatedComponents, ComponentAggregator};
pub use ignore_rules::IgnoreRules;
pub use license_normalizer::LicenseNormalizer;
pub use package_url_resolver::PackageUrlResolver;
pub use report_builder::{LicenseReport, OverviewEntry, ReportBuilder};
