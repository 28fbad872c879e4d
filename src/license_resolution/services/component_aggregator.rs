use super::{IgnoreRules, PackageUrlResolver};
use crate::license_resolution::domain::{CanonicalLicenseId, Component, SbomComponent};
use std::collections::BTreeMap;

/// Result of aggregation: the two indices over merged components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedComponents {
    by_package: BTreeMap<String, Component>,
    by_license: BTreeMap<CanonicalLicenseId, Vec<Component>>,
}

impl AggregatedComponents {
    /// Merged components keyed by package identifier
    pub fn by_package(&self) -> &BTreeMap<String, Component> {
        &self.by_package
    }

    /// Components declaring each license, sorted by name and version
    pub fn by_license(&self) -> &BTreeMap<CanonicalLicenseId, Vec<Component>> {
        &self.by_license
    }

    /// Every distinct license id, ascending
    pub fn license_ids(&self) -> Vec<CanonicalLicenseId> {
        self.by_license.keys().cloned().collect()
    }

    /// License ids with their reference counts, most used first.
    ///
    /// Ties are broken by ascending id.
    pub fn license_ranking(&self) -> Vec<(CanonicalLicenseId, usize)> {
        let mut ranking: Vec<(CanonicalLicenseId, usize)> = self
            .by_license
            .iter()
            .map(|(id, components)| (id.clone(), components.len()))
            .collect();

        ranking.sort_by(|(id_a, count_a), (id_b, count_b)| {
            count_b.cmp(count_a).then_with(|| id_a.cmp(id_b))
        });
        ranking
    }
}

/// ComponentAggregator service for merging duplicate package entries and
/// indexing them by license
///
/// The by-license index is derived from the final by-package mapping once
/// every merge is done, so listings always reference fully merged records.
pub struct ComponentAggregator;

impl ComponentAggregator {
    /// Aggregates SBOM components paired with their normalized license ids
    ///
    /// # Arguments
    /// * `entries` - Each SBOM component with its normalizer output
    /// * `ignore_rules` - Components whose identifier matches are dropped
    pub fn aggregate<'a, I>(entries: I, ignore_rules: &IgnoreRules) -> AggregatedComponents
    where
        I: IntoIterator<Item = (&'a SbomComponent, Vec<CanonicalLicenseId>)>,
    {
        let mut by_package: BTreeMap<String, Component> = BTreeMap::new();

        for (raw, licenses) in entries {
            let key = raw.identity_key();
            if ignore_rules.is_ignored(&key) {
                continue;
            }

            let component = Self::build_component(raw, key.clone(), licenses);
            let merged = match by_package.get(&key) {
                Some(existing) => existing.merged_with(&component),
                None => component,
            };
            by_package.insert(key, merged);
        }

        let by_license = Self::index_by_license(&by_package);

        AggregatedComponents {
            by_package,
            by_license,
        }
    }

    fn build_component(
        raw: &SbomComponent,
        identity_key: String,
        licenses: Vec<CanonicalLicenseId>,
    ) -> Component {
        let homepage = PackageUrlResolver::homepage(&identity_key);
        Component::new(
            raw.name.clone(),
            raw.version.clone(),
            identity_key,
            homepage,
            licenses,
            raw.copyright.clone().unwrap_or_default(),
        )
    }

    fn index_by_license(
        by_package: &BTreeMap<String, Component>,
    ) -> BTreeMap<CanonicalLicenseId, Vec<Component>> {
        let mut by_license: BTreeMap<CanonicalLicenseId, Vec<Component>> = BTreeMap::new();

        for component in by_package.values() {
            for id in component.licenses() {
                by_license
                    .entry(id.clone())
                    .or_default()
                    .push(component.clone());
            }
        }

        for components in by_license.values_mut() {
            components.sort_by(|a, b| a.cmp_by_name_version(b));
            components.dedup_by(|a, b| a.purl() == b.purl());
        }

        by_license
    }
}
