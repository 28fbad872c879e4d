use std::collections::HashMap;
use std::path::PathBuf;

/// ReportRequest - Input of the report generation use case
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    /// CycloneDX JSON SBOM to read
    pub sbom_path: PathBuf,
    /// Wildcard patterns over package identifiers to leave out of the report
    pub ignore_patterns: Vec<String>,
    /// Raw license expression → canonical license id, matched exactly
    pub overrides: HashMap<String, String>,
}

impl ReportRequest {
    pub fn new(sbom_path: PathBuf) -> Self {
        Self {
            sbom_path,
            ..Self::default()
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }
}
