use crate::license_resolution::domain::SbomComponent;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading the component list of an SBOM
pub trait SbomReader {
    /// Reads every component declared in the SBOM at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the file security checks
    /// - The content is not a parseable CycloneDX JSON document
    fn read_components(&self, path: &Path) -> Result<Vec<SbomComponent>>;
}
