use std::path::PathBuf;

/// CustomLicenseStore port for user-supplied `LicenseRef-*` texts
pub trait CustomLicenseStore: Send + Sync {
    /// Returns the user-supplied text for `id`, if present
    fn find(&self, id: &str) -> Option<String>;

    /// Where the text for `id` is expected; named in the diagnostic when
    /// the text is missing
    fn location(&self, id: &str) -> PathBuf;
}
