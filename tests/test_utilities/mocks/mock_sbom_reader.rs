use sbom_licenses::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub components: Vec<SbomComponent>,
    pub should_fail: bool,
}

impl MockSbomReader {
    pub fn new(components: Vec<SbomComponent>) -> Self {
        Self {
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            components: vec![],
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_components(&self, _path: &Path) -> Result<Vec<SbomComponent>> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM reader failure");
        }
        Ok(self.components.clone())
    }
}
