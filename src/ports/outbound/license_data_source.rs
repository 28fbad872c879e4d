use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// LicenseDataSource port for the authoritative license list
///
/// Implementations must be `Send + Sync`; texts for distinct ids are
/// fetched concurrently.
#[async_trait]
pub trait LicenseDataSource: Send + Sync {
    /// Loads the id → display name table
    ///
    /// # Errors
    /// Returns an error if the table cannot be fetched or parsed. This aborts
    /// the run.
    async fn fetch_license_names(&self) -> Result<HashMap<String, String>>;

    /// Fetches the full text of one license
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status
    async fn fetch_license_text(&self, id: &str) -> Result<String>;

    /// URL the text of `id` is fetched from, used in diagnostics
    fn license_text_url(&self, id: &str) -> String;

    /// Version label of the license list, recorded in report metadata
    fn license_list_version(&self) -> &str;

    /// Whether diagnostics for failed fetches may be persisted in the text
    /// cache. Sources that never reach the network return `false` so that a
    /// later online run still fetches the real text.
    fn caches_failures(&self) -> bool {
        true
    }
}
