use crate::license_resolution::domain::{
    CanonicalLicenseId, ResolvedLicenseText, TextOrigin, CUSTOM_LICENSE_PREFIX, DIAGNOSTIC_MARKER,
};
use crate::ports::outbound::{
    CustomLicenseStore, LicenseDataSource, LicenseTextCache, ProgressReporter,
};
use dashmap::DashMap;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

/// Maximum number of license texts fetched at the same time
pub const MAX_CONCURRENT_FETCHES: usize = 8;

/// Outcome of one step of the resolution cascade
enum CascadeStep {
    Resolved(ResolvedLicenseText),
    Next,
}

/// LicenseTextResolver - resolves display name and text for canonical ids
///
/// Cascade per id: text cache, then the custom license store for
/// `LicenseRef-*` ids, then the remote license list. Resolution never fails;
/// a missing custom text or a failed fetch yields a diagnostic text that
/// starts with [`DIAGNOSTIC_MARKER`].
///
/// Each id is resolved at most once per resolver, even when requested
/// concurrently.
pub struct LicenseTextResolver<'a, S, C, K> {
    data_source: &'a S,
    cache: &'a C,
    custom_store: &'a K,
    names: HashMap<String, String>,
    memo: DashMap<CanonicalLicenseId, Arc<OnceCell<ResolvedLicenseText>>>,
    warnings: Mutex<Vec<String>>,
    concurrency: usize,
}

impl<'a, S, C, K> LicenseTextResolver<'a, S, C, K>
where
    S: LicenseDataSource,
    C: LicenseTextCache,
    K: CustomLicenseStore,
{
    /// Creates a resolver
    ///
    /// # Arguments
    /// * `names` - Preloaded id → display name table
    pub fn new(
        data_source: &'a S,
        cache: &'a C,
        custom_store: &'a K,
        names: HashMap<String, String>,
    ) -> Self {
        Self {
            data_source,
            cache,
            custom_store,
            names,
            memo: DashMap::new(),
            warnings: Mutex::new(Vec::new()),
            concurrency: MAX_CONCURRENT_FETCHES,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Resolves one id
    pub async fn resolve(&self, id: &CanonicalLicenseId) -> ResolvedLicenseText {
        let cell = self.memo.entry(id.clone()).or_default().clone();
        cell.get_or_init(|| self.run_cascade(id)).await.clone()
    }

    /// Resolves every id concurrently, reporting progress as each finishes
    pub async fn resolve_all<P: ProgressReporter>(
        &self,
        ids: &[CanonicalLicenseId],
        progress_reporter: &P,
    ) -> HashMap<CanonicalLicenseId, ResolvedLicenseText> {
        let total = ids.len();
        let mut resolved = HashMap::with_capacity(total);

        let mut pending = stream::iter(ids.iter().cloned())
            .map(|id| async move {
                let text = self.resolve(&id).await;
                (id, text)
            })
            .buffer_unordered(self.concurrency);

        while let Some((id, text)) = pending.next().await {
            progress_reporter.report_progress(resolved.len() + 1, total, Some(id.as_str()));
            resolved.insert(id, text);
        }

        resolved
    }

    /// Drains warnings collected while resolving (e.g. cache write failures)
    pub fn take_warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(mut warnings) => std::mem::take(&mut *warnings),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    async fn run_cascade(&self, id: &CanonicalLicenseId) -> ResolvedLicenseText {
        let name = self.display_name(id);

        if let CascadeStep::Resolved(text) = self.cached_text(id, &name) {
            return text;
        }
        if let CascadeStep::Resolved(text) = self.custom_text(id, &name) {
            return text;
        }
        self.remote_text(id, name).await
    }

    fn display_name(&self, id: &CanonicalLicenseId) -> String {
        self.names
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    fn cached_text(&self, id: &CanonicalLicenseId, name: &str) -> CascadeStep {
        match self.cache.read(id.as_str()) {
            Some(text) => CascadeStep::Resolved(ResolvedLicenseText::new(
                name.to_string(),
                text,
                TextOrigin::Cache,
            )),
            None => CascadeStep::Next,
        }
    }

    fn custom_text(&self, id: &CanonicalLicenseId, name: &str) -> CascadeStep {
        if !id.is_custom() {
            return CascadeStep::Next;
        }

        let resolved = match self.custom_store.find(id.as_str()) {
            Some(text) => ResolvedLicenseText::new(name.to_string(), text, TextOrigin::CustomStore),
            None => {
                let location = self.custom_store.location(id.as_str());
                let text = format!(
                    "{} Custom license text for {} was not found.\n\
                     Expected file: {}\n\
                     Add the license text at that path and delete the cached entry to pick it up.",
                    DIAGNOSTIC_MARKER,
                    id,
                    location.display()
                );
                ResolvedLicenseText::new(name.to_string(), text, TextOrigin::MissingCustomText)
            }
        };

        self.store(id, resolved.text());
        CascadeStep::Resolved(resolved)
    }

    async fn remote_text(&self, id: &CanonicalLicenseId, name: String) -> ResolvedLicenseText {
        let fetched = self
            .data_source
            .fetch_license_text(id.as_str())
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    anyhow::bail!("the license list returned an empty text");
                }
                Ok(text)
            });

        match fetched {
            Ok(text) => {
                self.store(id, &text);
                ResolvedLicenseText::new(name, text, TextOrigin::Remote)
            }
            Err(e) => {
                let custom_id = format!("{}{}", CUSTOM_LICENSE_PREFIX, id);
                let text = format!(
                    "{} Failed to fetch the license text for {} from {}\n\
                     Error: {}\n\
                     Map the declaration to a valid license id with an `overrides` entry in \
                     the config file, or map it to {} and supply a custom license text at {}.\n\
                     This message is cached; delete the cached entry after fixing the mapping.",
                    DIAGNOSTIC_MARKER,
                    id,
                    self.data_source.license_text_url(id.as_str()),
                    e,
                    custom_id,
                    self.custom_store.location(&custom_id).display()
                );
                if self.data_source.caches_failures() {
                    self.store(id, &text);
                }
                ResolvedLicenseText::new(name, text, TextOrigin::FetchFailed)
            }
        }
    }

    fn store(&self, id: &CanonicalLicenseId, text: &str) {
        if let Err(e) = self.cache.write(id.as_str(), text) {
            self.warn(format!(
                "⚠️  Warning: Failed to cache license text for {}: {}",
                id, e
            ));
        }
    }

    fn warn(&self, message: String) {
        match self.warnings.lock() {
            Ok(mut warnings) => warnings.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_resolution::domain::is_diagnostic_text;
    use crate::shared::Result;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        texts: HashMap<String, String>,
        calls: AtomicUsize,
        caches_failures: bool,
    }

    impl StubSource {
        fn with_texts(texts: &[(&str, &str)]) -> Self {
            Self {
                texts: texts
                    .iter()
                    .map(|(id, text)| (id.to_string(), text.to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
                caches_failures: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LicenseDataSource for StubSource {
        async fn fetch_license_names(&self) -> Result<HashMap<String, String>> {
            Ok(HashMap::new())
        }

        async fn fetch_license_text(&self, id: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.texts
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("HTTP status 404 Not Found"))
        }

        fn license_text_url(&self, id: &str) -> String {
            format!("https://licenses.test/text/{}.txt", id)
        }

        fn license_list_version(&self) -> &str {
            "test"
        }

        fn caches_failures(&self) -> bool {
            self.caches_failures
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl LicenseTextCache for MemoryCache {
        fn read(&self, id: &str) -> Option<String> {
            self.entries.lock().unwrap().get(id).cloned()
        }

        fn write(&self, id: &str, text: &str) -> Result<()> {
            if self.fail_writes {
                anyhow::bail!("read-only file system");
            }
            self.entries
                .lock()
                .unwrap()
                .insert(id.to_string(), text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        texts: HashMap<String, String>,
        lookups: AtomicUsize,
    }

    impl CustomLicenseStore for MemoryStore {
        fn find(&self, id: &str) -> Option<String> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.texts.get(id).cloned()
        }

        fn location(&self, id: &str) -> PathBuf {
            PathBuf::from("custom-licenses").join(format!("{}.txt", id))
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn names() -> HashMap<String, String> {
        HashMap::from([("MIT".to_string(), "MIT License".to_string())])
    }

    #[tokio::test]
    async fn test_cached_text_never_touches_the_network() {
        let source = StubSource::with_texts(&[("MIT", "remote text")]);
        let cache = MemoryCache::default();
        cache.write("MIT", "cached text").unwrap();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("MIT")).await;

        assert_eq!(resolved.text(), "cached text");
        assert_eq!(resolved.name(), "MIT License");
        assert_eq!(resolved.origin(), TextOrigin::Cache);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_text_is_fetched_and_cached() {
        let source = StubSource::with_texts(&[("MIT", "Permission is hereby granted")]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("MIT")).await;

        assert_eq!(resolved.origin(), TextOrigin::Remote);
        assert_eq!(
            cache.read("MIT").as_deref(),
            Some("Permission is hereby granted")
        );
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_name_falls_back_to_id() {
        let source = StubSource::with_texts(&[("Zlib", "zlib text")]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("Zlib")).await;
        assert_eq!(resolved.name(), "Zlib");
    }

    #[tokio::test]
    async fn test_custom_text_comes_from_store() {
        let source = StubSource::with_texts(&[]);
        let cache = MemoryCache::default();
        let store = MemoryStore {
            texts: HashMap::from([(
                "LicenseRef-Acme-EULA".to_string(),
                "Acme EULA text".to_string(),
            )]),
            ..MemoryStore::default()
        };

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver
            .resolve(&CanonicalLicenseId::new("LicenseRef-Acme-EULA"))
            .await;

        assert_eq!(resolved.text(), "Acme EULA text");
        assert_eq!(resolved.origin(), TextOrigin::CustomStore);
        assert_eq!(source.calls(), 0);
        assert_eq!(
            cache.read("LicenseRef-Acme-EULA").as_deref(),
            Some("Acme EULA text")
        );
    }

    #[tokio::test]
    async fn test_missing_custom_text_is_cached_diagnostic() {
        let source = StubSource::with_texts(&[]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();
        let id = CanonicalLicenseId::new("LicenseRef-Acme-EULA");

        let first = LicenseTextResolver::new(&source, &cache, &store, names())
            .resolve(&id)
            .await;

        assert_eq!(first.origin(), TextOrigin::MissingCustomText);
        assert!(is_diagnostic_text(first.text()));
        let expected_path = PathBuf::from("custom-licenses").join("LicenseRef-Acme-EULA.txt");
        assert!(first.text().contains(&expected_path.display().to_string()));
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);

        // A later run reads the diagnostic back from the cache
        let second = LicenseTextResolver::new(&source, &cache, &store, names())
            .resolve(&id)
            .await;

        assert_eq!(second.text(), first.text());
        assert_eq!(second.origin(), TextOrigin::Cache);
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_diagnostic_with_url() {
        let source = StubSource::with_texts(&[]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("MIT")).await;

        assert_eq!(resolved.origin(), TextOrigin::FetchFailed);
        assert!(is_diagnostic_text(resolved.text()));
        assert!(resolved
            .text()
            .contains("https://licenses.test/text/MIT.txt"));
        assert!(resolved.text().contains("404 Not Found"));
        assert_eq!(cache.read("MIT").as_deref(), Some(resolved.text()));
    }

    #[tokio::test]
    async fn test_fetch_failure_suggests_override_or_custom_text() {
        let source = StubSource::with_texts(&[]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver
            .resolve(&CanonicalLicenseId::new("BSD-3-Clause"))
            .await;

        let text = resolved.text();
        assert!(text.contains("`overrides` entry"));
        let custom_path =
            PathBuf::from("custom-licenses").join("LicenseRef-BSD-3-Clause.txt");
        assert!(text.contains(&custom_path.display().to_string()));
        assert!(!text.contains("run again"));
    }

    #[tokio::test]
    async fn test_fetch_failure_not_cached_when_source_opts_out() {
        let mut source = StubSource::with_texts(&[]);
        source.caches_failures = false;
        let cache = MemoryCache::default();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("MIT")).await;

        assert!(is_diagnostic_text(resolved.text()));
        assert!(cache.read("MIT").is_none());
    }

    #[tokio::test]
    async fn test_empty_remote_text_is_treated_as_failure() {
        let source = StubSource::with_texts(&[("MIT", "  \n")]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("MIT")).await;

        assert_eq!(resolved.origin(), TextOrigin::FetchFailed);
        assert!(resolved.text().contains("empty text"));
    }

    #[tokio::test]
    async fn test_cache_write_failure_is_a_warning() {
        let source = StubSource::with_texts(&[("MIT", "mit text")]);
        let cache = MemoryCache {
            fail_writes: true,
            ..MemoryCache::default()
        };
        let store = MemoryStore::default();

        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let resolved = resolver.resolve(&CanonicalLicenseId::new("MIT")).await;

        assert_eq!(resolved.text(), "mit text");
        let warnings = resolver.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("read-only file system"));
        assert!(resolver.take_warnings().is_empty());
    }

    #[tokio::test]
    async fn test_each_id_is_resolved_once() {
        let source = StubSource::with_texts(&[("MIT", "mit text")]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();
        let resolver = LicenseTextResolver::new(&source, &cache, &store, names());
        let mit = CanonicalLicenseId::new("MIT");

        let (a, b) = tokio::join!(resolver.resolve(&mit), resolver.resolve(&mit));
        let c = resolver.resolve(&mit).await;

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_all_returns_every_id() {
        let source = StubSource::with_texts(&[("MIT", "mit"), ("Apache-2.0", "apache")]);
        let cache = MemoryCache::default();
        let store = MemoryStore::default();
        let ids = vec![
            CanonicalLicenseId::new("Apache-2.0"),
            CanonicalLicenseId::new("MIT"),
            CanonicalLicenseId::new("LicenseRef-Missing"),
        ];

        let resolver =
            LicenseTextResolver::new(&source, &cache, &store, names()).with_concurrency(2);
        let resolved = resolver.resolve_all(&ids, &SilentReporter).await;

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[&ids[0]].text(), "apache");
        assert_eq!(resolved[&ids[1]].text(), "mit");
        assert!(is_diagnostic_text(resolved[&ids[2]].text()));
        assert_eq!(source.calls(), 2);
    }
}
