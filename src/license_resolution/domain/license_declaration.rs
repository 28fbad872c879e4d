/// RawLicenseDeclaration value object as found on an SBOM component
///
/// A component carries zero or more of these. Only `Id` is already
/// canonical; the other two go through override lookup and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLicenseDeclaration {
    /// `{license: {id}}` - an SPDX identifier, used as-is
    Id(String),
    /// `{expression}` - a compound license expression
    Expression(String),
    /// `{license: {name}}` - free-text license name
    Name(String),
}

impl RawLicenseDeclaration {
    /// Returns the raw expression string to normalize, if this declaration
    /// needs normalization and carries non-blank text. The text is returned
    /// untrimmed so override lookups stay exact.
    pub fn raw_expression(&self) -> Option<&str> {
        match self {
            RawLicenseDeclaration::Id(_) => None,
            RawLicenseDeclaration::Expression(text) | RawLicenseDeclaration::Name(text) => {
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text.as_str())
                }
            }
        }
    }
}
