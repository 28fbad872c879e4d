use crate::license_resolution::domain::{RawLicenseDeclaration, SbomComponent};
use crate::ports::outbound::SbomReader;
use crate::shared::error::ReportError;
use crate::shared::security::{ensure_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// CycloneDX document, reduced to the fields the report needs
#[derive(Debug, Deserialize)]
struct CycloneDxBom {
    #[serde(default)]
    components: Vec<CycloneDxComponent>,
}

#[derive(Debug, Deserialize)]
struct CycloneDxComponent {
    name: Option<String>,
    version: Option<String>,
    purl: Option<String>,
    #[serde(default)]
    licenses: Vec<LicenseChoice>,
    copyright: Option<String>,
    /// Sub-components are reported like top-level ones
    #[serde(default)]
    components: Vec<CycloneDxComponent>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseChoice {
    License { license: LicenseEntry },
    Expression { expression: String },
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct LicenseEntry {
    id: Option<String>,
    name: Option<String>,
}

impl LicenseChoice {
    fn into_declaration(self) -> Option<RawLicenseDeclaration> {
        match self {
            LicenseChoice::License { license } => match (license.id, license.name) {
                (Some(id), _) => Some(RawLicenseDeclaration::Id(id)),
                (None, Some(name)) => Some(RawLicenseDeclaration::Name(name)),
                (None, None) => None,
            },
            LicenseChoice::Expression { expression } => {
                Some(RawLicenseDeclaration::Expression(expression))
            }
            LicenseChoice::Other(_) => None,
        }
    }
}

/// FileSystemReader adapter for reading CycloneDX JSON SBOMs
///
/// Components without a name are skipped. A missing version reads as an
/// empty string.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> serde_json::Result<Vec<SbomComponent>> {
        let bom: CycloneDxBom = serde_json::from_str(content)?;
        let mut components = Vec::new();
        Self::collect(bom.components, &mut components);
        Ok(components)
    }

    /// `pkg:npm/left-pad@1.3.0?arch=x#sub` → `npm/left-pad@1.3.0`
    fn package_identifier(purl: &str) -> Option<String> {
        let trimmed = purl.trim();
        let without_scheme = trimmed.strip_prefix("pkg:").unwrap_or(trimmed);
        let end = without_scheme
            .find(|c: char| c == '?' || c == '#')
            .unwrap_or(without_scheme.len());
        let identifier = &without_scheme[..end];
        (!identifier.is_empty()).then(|| identifier.to_string())
    }

    fn collect(raw: Vec<CycloneDxComponent>, out: &mut Vec<SbomComponent>) {
        for component in raw {
            let children = component.components;

            if let Some(name) = component.name.filter(|n| !n.trim().is_empty()) {
                out.push(SbomComponent {
                    name,
                    version: component.version.unwrap_or_default(),
                    purl: component.purl.as_deref().and_then(Self::package_identifier),
                    licenses: component
                        .licenses
                        .into_iter()
                        .filter_map(LicenseChoice::into_declaration)
                        .collect(),
                    copyright: component.copyright,
                });
            }

            Self::collect(children, out);
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_components(&self, path: &Path) -> Result<Vec<SbomComponent>> {
        if !path.exists() {
            return Err(ReportError::SbomNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        ensure_readable_file(path, "SBOM", MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| {
            ReportError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
