use serde::Serialize;

/// Prefix shared by every custom license reference
pub const CUSTOM_LICENSE_PREFIX: &str = "LicenseRef-";

/// Prefix of placeholder identifiers synthesized for unparseable license text
pub const UNKNOWN_LICENSE_PREFIX: &str = "LicenseRef-UNKNOWN-";

/// Maximum number of slug characters kept after the unknown-license prefix
const MAX_UNKNOWN_SLUG_LENGTH: usize = 40;

/// NewType wrapper for a canonical license identifier
///
/// A canonical identifier is either a valid SPDX license identifier,
/// a `LicenseRef-*` custom reference, or a synthesized
/// `LicenseRef-UNKNOWN-<slug>` placeholder. Identifiers are case-sensitive
/// and compare ordinally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalLicenseId(String);

impl CanonicalLicenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Synthesizes a deterministic placeholder identifier for a raw expression
    /// that could not be parsed.
    ///
    /// Every run of non-alphanumeric characters collapses into a single hyphen
    /// and the slug is capped at 40 characters.
    pub fn unknown(raw_expression: &str) -> Self {
        let mut slug = String::with_capacity(raw_expression.len());
        let mut in_separator_run = false;

        for ch in raw_expression.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch);
                in_separator_run = false;
            } else if !in_separator_run {
                slug.push('-');
                in_separator_run = true;
            }
        }

        // Slug is pure ASCII, so byte truncation is char-safe
        slug.truncate(MAX_UNKNOWN_SLUG_LENGTH);

        Self(format!("{}{}", UNKNOWN_LICENSE_PREFIX, slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id refers to a custom license text (`LicenseRef-*`)
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_LICENSE_PREFIX)
    }

    /// Whether this id is a synthesized placeholder for an unrecognized expression
    pub fn is_unknown(&self) -> bool {
        self.0.starts_with(UNKNOWN_LICENSE_PREFIX)
    }
}

impl std::fmt::Display for CanonicalLicenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CanonicalLicenseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
