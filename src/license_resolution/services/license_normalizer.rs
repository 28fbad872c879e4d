use crate::license_resolution::domain::{
    CanonicalLicenseId, ExpressionNode, RawLicenseDeclaration,
};
use std::collections::HashMap;

/// LicenseNormalizer service for turning raw license declarations into
/// canonical license identifiers
///
/// This service contains pure business logic with no I/O. The same
/// declarations always produce the same sorted, duplicate-free output.
#[derive(Debug, Clone, Default)]
pub struct LicenseNormalizer {
    overrides: HashMap<String, CanonicalLicenseId>,
}

impl LicenseNormalizer {
    /// Creates a normalizer with an explicit override mapping
    ///
    /// # Arguments
    /// * `overrides` - Raw expression string to canonical id, matched exactly
    pub fn new(overrides: HashMap<String, CanonicalLicenseId>) -> Self {
        Self { overrides }
    }

    /// Normalizes one component's declarations
    ///
    /// # Returns
    /// Sorted, deduplicated canonical ids; empty when nothing was declared
    pub fn normalize(&self, declarations: &[RawLicenseDeclaration]) -> Vec<CanonicalLicenseId> {
        let mut ids: Vec<CanonicalLicenseId> = declarations
            .iter()
            .flat_map(|declaration| self.normalize_declaration(declaration))
            .collect();

        ids.sort();
        ids.dedup();
        ids
    }

    fn normalize_declaration(&self, declaration: &RawLicenseDeclaration) -> Vec<CanonicalLicenseId> {
        if let RawLicenseDeclaration::Id(id) = declaration {
            return vec![CanonicalLicenseId::new(id.as_str())];
        }

        let Some(raw_expression) = declaration.raw_expression() else {
            return Vec::new();
        };

        if let Some(mapped) = self.overrides.get(raw_expression) {
            return vec![mapped.clone()];
        }

        match ExpressionNode::parse(raw_expression) {
            Some(tree) => tree.leaf_ids(),
            None => vec![CanonicalLicenseId::unknown(raw_expression)],
        }
    }
}
