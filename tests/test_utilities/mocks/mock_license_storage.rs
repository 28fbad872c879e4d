use sbom_licenses::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory LicenseTextCache; clones share the same entries
#[derive(Clone, Default)]
pub struct InMemoryLicenseTextCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryLicenseTextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, id: &str, text: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(id.to_string(), text.to_string());
        self
    }

    pub fn get(&self, id: &str) -> Option<String> {
        self.entries.lock().unwrap().get(id).cloned()
    }
}

impl LicenseTextCache for InMemoryLicenseTextCache {
    fn read(&self, id: &str) -> Option<String> {
        self.get(id)
    }

    fn write(&self, id: &str, text: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(id.to_string(), text.to_string());
        Ok(())
    }
}

/// In-memory CustomLicenseStore counting lookups
#[derive(Clone, Default)]
pub struct InMemoryCustomLicenseStore {
    texts: HashMap<String, String>,
    find_calls: Arc<AtomicUsize>,
}

impl InMemoryCustomLicenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.texts.insert(id.to_string(), text.to_string());
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

impl CustomLicenseStore for InMemoryCustomLicenseStore {
    fn find(&self, id: &str) -> Option<String> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.texts.get(id).cloned()
    }

    fn location(&self, id: &str) -> PathBuf {
        PathBuf::from("custom-licenses").join(format!("{}.txt", id))
    }
}
