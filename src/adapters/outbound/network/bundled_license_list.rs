use crate::ports::outbound::LicenseDataSource;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// BundledLicenseList adapter for offline runs
///
/// Display names come from the license table compiled into the `spdx`
/// crate. No texts are available, so every text fetch fails and the
/// resolver falls back to cached or custom texts and diagnostics.
pub struct BundledLicenseList;

impl BundledLicenseList {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BundledLicenseList {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseDataSource for BundledLicenseList {
    async fn fetch_license_names(&self) -> Result<HashMap<String, String>> {
        Ok(spdx::identifiers::LICENSES
            .iter()
            .map(|(id, name, _)| (id.to_string(), name.to_string()))
            .collect())
    }

    async fn fetch_license_text(&self, id: &str) -> Result<String> {
        anyhow::bail!("running offline, the text of {} was not downloaded", id)
    }

    fn license_text_url(&self, id: &str) -> String {
        format!("offline (no source for {})", id)
    }

    fn license_list_version(&self) -> &str {
        "bundled"
    }

    fn caches_failures(&self) -> bool {
        false
    }
}
