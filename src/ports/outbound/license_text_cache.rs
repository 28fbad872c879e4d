use crate::shared::Result;

/// LicenseTextCache port for persisting resolved license texts across runs
pub trait LicenseTextCache: Send + Sync {
    /// Returns the cached text for `id`, if any
    fn read(&self, id: &str) -> Option<String>;

    /// Stores `text` for `id`, replacing any previous entry
    ///
    /// # Errors
    /// Returns an error if the entry cannot be written. Callers treat this as
    /// a warning.
    fn write(&self, id: &str, text: &str) -> Result<()>;
}
