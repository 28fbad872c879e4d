use super::{CanonicalLicenseId, RawLicenseDeclaration};
use std::cmp::Ordering;

/// SbomComponent - a component entry exactly as loaded from the SBOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomComponent {
    pub name: String,
    pub version: String,
    /// Package identifier (purl-like `type/name@version`)
    pub purl: Option<String>,
    pub licenses: Vec<RawLicenseDeclaration>,
    pub copyright: Option<String>,
}

impl SbomComponent {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            purl: None,
            licenses: Vec::new(),
            copyright: None,
        }
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    pub fn with_license(mut self, declaration: RawLicenseDeclaration) -> Self {
        self.licenses.push(declaration);
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Identity key used to merge duplicate entries.
    ///
    /// Falls back to `name@version` when the SBOM omits the package identifier.
    pub fn identity_key(&self) -> String {
        match self.purl.as_deref() {
            Some(purl) if !purl.is_empty() => purl.to_string(),
            _ => format!("{}@{}", self.name, self.version),
        }
    }
}

/// Component value object - a resolved package record
///
/// Merging never mutates a record in place; it produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: String,
    purl: String,
    homepage: Option<String>,
    licenses: Vec<CanonicalLicenseId>,
    copyright: String,
}

impl Component {
    pub fn new(
        name: String,
        version: String,
        purl: String,
        homepage: Option<String>,
        mut licenses: Vec<CanonicalLicenseId>,
        copyright: String,
    ) -> Self {
        licenses.sort();
        licenses.dedup();
        Self {
            name,
            version,
            purl,
            homepage,
            licenses,
            copyright,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn licenses(&self) -> &[CanonicalLicenseId] {
        &self.licenses
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Merges a later record for the same package into a new record.
    ///
    /// The license set becomes the sorted union of both. The copyright of
    /// `self` is kept unless it is empty.
    pub fn merged_with(&self, other: &Component) -> Component {
        let licenses = self
            .licenses
            .iter()
            .chain(other.licenses.iter())
            .cloned()
            .collect();

        let copyright = if self.copyright.is_empty() {
            other.copyright.clone()
        } else {
            self.copyright.clone()
        };

        Component::new(
            self.name.clone(),
            self.version.clone(),
            self.purl.clone(),
            self.homepage.clone().or_else(|| other.homepage.clone()),
            licenses,
            copyright,
        )
    }

    /// Ordering used by every component listing: name, then version
    pub fn cmp_by_name_version(&self, other: &Component) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.purl.cmp(&other.purl))
    }
}
