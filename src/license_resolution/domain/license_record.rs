use super::{CanonicalLicenseId, Component};

/// Marker that opens every diagnostic placeholder text.
///
/// Diagnostics are persisted in the text cache, so the marker is the only
/// way to tell them apart from genuine license text on later runs.
pub const DIAGNOSTIC_MARKER: &str = "[license-text-unavailable]";

/// Where a resolved license text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    /// Read back from the on-disk text cache
    Cache,
    /// Read from the custom license text store
    CustomStore,
    /// Fetched from the remote license list
    Remote,
    /// Diagnostic: custom text file missing
    MissingCustomText,
    /// Diagnostic: remote fetch failed
    FetchFailed,
    /// Diagnostic: no resolution was attempted for the id
    Unresolved,
}

/// ResolvedLicenseText value object - display name and text of one license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLicenseText {
    name: String,
    text: String,
    origin: TextOrigin,
}

impl ResolvedLicenseText {
    pub fn new(name: String, text: String, origin: TextOrigin) -> Self {
        Self { name, text, origin }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> TextOrigin {
        self.origin
    }
}

/// Whether a text is a diagnostic placeholder rather than a license text
pub fn is_diagnostic_text(text: &str) -> bool {
    text.starts_with(DIAGNOSTIC_MARKER)
}

/// LicenseRecord - a license with its text and the components declaring it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    id: CanonicalLicenseId,
    name: String,
    text: String,
    components: Vec<Component>,
}

impl LicenseRecord {
    pub fn new(
        id: CanonicalLicenseId,
        resolved: ResolvedLicenseText,
        components: Vec<Component>,
    ) -> Self {
        Self {
            id,
            name: resolved.name,
            text: resolved.text,
            components,
        }
    }

    pub fn id(&self) -> &CanonicalLicenseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn has_diagnostic_text(&self) -> bool {
        is_diagnostic_text(&self.text)
    }
}
