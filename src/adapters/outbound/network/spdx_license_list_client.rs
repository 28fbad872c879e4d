use crate::ports::outbound::LicenseDataSource;
use crate::shared::error::ReportError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// license-list-data release tag used when none is configured
pub const DEFAULT_LICENSE_LIST_VERSION: &str = "v3.25.0";

const LICENSE_LIST_BASE_URL: &str = "https://raw.githubusercontent.com/spdx/license-list-data";

#[derive(Debug, Deserialize)]
struct LicenseListDocument {
    licenses: Vec<LicenseListEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseListEntry {
    license_id: String,
    name: String,
}

/// SpdxLicenseListClient adapter fetching from a pinned SPDX
/// license-list-data release
///
/// No retries: a failed text fetch becomes a diagnostic in the report, and
/// the fixed timeout only bounds a hung request.
pub struct SpdxLicenseListClient {
    client: reqwest::Client,
    base_url: String,
    version: String,
}

impl SpdxLicenseListClient {
    /// Creates a client for the given release tag (e.g. `v3.25.0`)
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let user_agent = format!("sbom-licenses/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: LICENSE_LIST_BASE_URL.to_string(),
            version: version.into(),
        })
    }

    /// Points the client at a mirror of the license-list-data repository
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn license_list_url(&self) -> String {
        format!("{}/{}/json/licenses.json", self.base_url, self.version)
    }

    /// Rejects ids that could escape the text directory of the release
    fn validate_license_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("License id is empty");
        }
        if id.contains('/') || id.contains('\\') || id.contains("..") {
            anyhow::bail!(
                "Security: license id '{}' contains path components which are not allowed",
                id
            );
        }
        if id.contains('#') || id.contains('?') {
            anyhow::bail!("Security: license id '{}' contains URL-unsafe characters", id);
        }
        Ok(())
    }

    fn parse_license_names(body: &str) -> serde_json::Result<HashMap<String, String>> {
        let document: LicenseListDocument = serde_json::from_str(body)?;
        Ok(document
            .licenses
            .into_iter()
            .map(|entry| (entry.license_id, entry.name))
            .collect())
    }
}

#[async_trait]
impl LicenseDataSource for SpdxLicenseListClient {
    async fn fetch_license_names(&self) -> Result<HashMap<String, String>> {
        let url = self.license_list_url();
        let list_error = |details: String| ReportError::LicenseListError {
            url: url.clone(),
            details,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| list_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(list_error(format!("HTTP status {}", response.status())).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| list_error(e.to_string()))?;

        Self::parse_license_names(&body).map_err(|e| list_error(e.to_string()).into())
    }

    async fn fetch_license_text(&self, id: &str) -> Result<String> {
        Self::validate_license_id(id)?;

        let response = self.client.get(self.license_text_url(id)).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP status {}", response.status());
        }

        Ok(response.text().await?)
    }

    fn license_text_url(&self, id: &str) -> String {
        format!(
            "{}/{}/text/{}.txt",
            self.base_url,
            self.version,
            urlencoding::encode(id)
        )
    }

    fn license_list_version(&self) -> &str {
        &self.version
    }
}
