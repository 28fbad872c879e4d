use async_trait::async_trait;
use sbom_licenses::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock LicenseDataSource serving canned names and texts, counting text fetches
#[derive(Clone, Default)]
pub struct MockLicenseDataSource {
    pub names: HashMap<String, String>,
    pub texts: HashMap<String, String>,
    pub names_unavailable: bool,
    text_calls: Arc<AtomicUsize>,
}

impl MockLicenseDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, id: &str, name: &str, text: &str) -> Self {
        self.names.insert(id.to_string(), name.to_string());
        self.texts.insert(id.to_string(), text.to_string());
        self
    }

    /// Known name whose text fetch fails
    pub fn with_unreachable_text(mut self, id: &str, name: &str) -> Self {
        self.names.insert(id.to_string(), name.to_string());
        self
    }

    pub fn with_names_unavailable(mut self) -> Self {
        self.names_unavailable = true;
        self
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LicenseDataSource for MockLicenseDataSource {
    async fn fetch_license_names(&self) -> Result<HashMap<String, String>> {
        if self.names_unavailable {
            anyhow::bail!("Mock license list unavailable");
        }
        Ok(self.names.clone())
    }

    async fn fetch_license_text(&self, id: &str) -> Result<String> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        match self.texts.get(id) {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("HTTP status 404 Not Found"),
        }
    }

    fn license_text_url(&self, id: &str) -> String {
        format!("https://licenses.test/v3.25.0/text/{}.txt", id)
    }

    fn license_list_version(&self) -> &str {
        "v3.25.0"
    }
}
