use super::CanonicalLicenseId;
use spdx::expression::ExprNode;
use spdx::{Expression, LicenseItem, LicenseReq, ParseMode};

const PARSE_MODE: ParseMode = ParseMode {
    allow_lower_case_operators: false,
    allow_slash_as_or_operator: false,
    allow_imprecise_license_names: false,
    allow_postfix_plus_on_gpl: true,
};

/// Binary tree of a parsed compound license expression
///
/// Conjunction and disjunction are not distinguished: only the leaves
/// matter when collecting the licenses a package is offered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionNode {
    Leaf(CanonicalLicenseId),
    Branch {
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    /// Parses a raw license expression into a tree.
    ///
    /// Returns `None` when the string is not a valid SPDX expression.
    /// GPL `+` suffixes and deprecated bare GPL ids are accepted and
    /// normalized to their `-only` / `-or-later` variants. Imprecise names
    /// ("BSD", "GPL", "Apache 2.0") and `/` separators are rejected.
    pub fn parse(raw_expression: &str) -> Option<Self> {
        let expression = Expression::parse_mode(raw_expression, PARSE_MODE).ok()?;
        Self::from_postfix(&expression)
    }

    /// Rebuilds the tree from the postfix node stream of a parsed expression
    fn from_postfix(expression: &Expression) -> Option<Self> {
        let mut stack: Vec<ExpressionNode> = Vec::new();

        for node in expression.iter() {
            match node {
                ExprNode::Req(req) => {
                    stack.push(ExpressionNode::Leaf(canonical_leaf_id(&req.req)));
                }
                ExprNode::Op(_) => {
                    let right = stack.pop()?;
                    let left = stack.pop()?;
                    stack.push(ExpressionNode::Branch {
                        left: Box::new(left),
                        right: Box::new(right),
                    });
                }
            }
        }

        let root = stack.pop()?;
        if !stack.is_empty() {
            return None;
        }
        Some(root)
    }

    /// Collects leaf identifiers depth-first, left before right
    pub fn leaf_ids(&self) -> Vec<CanonicalLicenseId> {
        let mut ids = Vec::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                ExpressionNode::Leaf(id) => ids.push(id.clone()),
                ExpressionNode::Branch { left, right } => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }

        ids
    }
}

/// Renders the license part of a requirement as a canonical id.
///
/// `WITH` exceptions are dropped.
fn canonical_leaf_id(req: &LicenseReq) -> CanonicalLicenseId {
    match &req.license {
        LicenseItem::Spdx { id, or_later } => {
            let gnu = (id.is_gnu() || is_gnu_name(id.name))
                .then(|| gnu_variant(id.name, *or_later))
                .filter(|candidate| spdx::license_id(candidate).is_some());

            if let Some(candidate) = gnu {
                CanonicalLicenseId::new(candidate)
            } else if *or_later {
                CanonicalLicenseId::new(format!("{}+", id.name))
            } else {
                CanonicalLicenseId::new(id.name)
            }
        }
        other => CanonicalLicenseId::new(other.to_string()),
    }
}

fn is_gnu_name(name: &str) -> bool {
    ["GPL-", "LGPL-", "AGPL-", "GFDL-"]
        .iter()
        .any(|family| name.starts_with(family))
}

/// Maps a GNU license spelling to its explicit `-only` or `-or-later` form.
///
/// The result is only a candidate: ids such as
/// `GPL-2.0-with-classpath-exception` have no `-only` counterpart.
fn gnu_variant(name: &str, or_later: bool) -> String {
    if let Some(stem) = name.strip_suffix("-or-later") {
        return format!("{}-or-later", stem);
    }
    if let Some(stem) = name.strip_suffix('+') {
        return format!("{}-or-later", stem);
    }

    let stem = name.strip_suffix("-only").unwrap_or(name);
    if or_later {
        format!("{}-or-later", stem)
    } else {
        format!("{}-only", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(node: &ExpressionNode) -> Vec<String> {
        node.leaf_ids()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_parse_single_identifier() {
        let tree = ExpressionNode::parse("MIT").unwrap();
        assert_eq!(tree, ExpressionNode::Leaf(CanonicalLicenseId::new("MIT")));
    }

    #[test]
    fn test_parse_disjunction_builds_branch() {
        let tree = ExpressionNode::parse("MIT OR Apache-2.0").unwrap();
        assert!(matches!(tree, ExpressionNode::Branch { .. }));
        assert_eq!(ids(&tree), vec!["MIT", "Apache-2.0"]);
    }

    #[test]
    fn test_leaf_order_is_left_before_right() {
        let tree = ExpressionNode::parse("(MIT AND Zlib) OR (ISC AND BSD-3-Clause)").unwrap();
        assert_eq!(ids(&tree), vec!["MIT", "Zlib", "ISC", "BSD-3-Clause"]);
    }

    #[test]
    fn test_duplicate_leaves_are_kept() {
        let tree = ExpressionNode::parse("MIT OR (MIT AND ISC)").unwrap();
        assert_eq!(ids(&tree), vec!["MIT", "MIT", "ISC"]);
    }

    #[test]
    fn test_gpl_variants_are_normalized() {
        let plus = ExpressionNode::parse("GPL-2.0+").unwrap();
        assert_eq!(ids(&plus), vec!["GPL-2.0-or-later"]);

        let bare = ExpressionNode::parse("GPL-3.0").unwrap();
        assert_eq!(ids(&bare), vec!["GPL-3.0-only"]);

        let explicit = ExpressionNode::parse("LGPL-2.1-or-later").unwrap();
        assert_eq!(ids(&explicit), vec!["LGPL-2.1-or-later"]);
    }

    #[test]
    fn test_exception_is_dropped() {
        let tree = ExpressionNode::parse("Apache-2.0 WITH LLVM-exception").unwrap();
        assert_eq!(ids(&tree), vec!["Apache-2.0"]);
    }

    #[test]
    fn test_license_ref_leaf() {
        let tree = ExpressionNode::parse("MIT OR LicenseRef-Acme-EULA").unwrap();
        assert_eq!(ids(&tree), vec!["MIT", "LicenseRef-Acme-EULA"]);
    }

    #[test]
    fn test_gnu_exception_ids_are_kept_verbatim() {
        let tree = ExpressionNode::parse("GPL-2.0-with-classpath-exception").unwrap();
        assert_eq!(ids(&tree), vec!["GPL-2.0-with-classpath-exception"]);
    }

    #[test]
    fn test_imprecise_names_are_rejected() {
        for raw in ["BSD", "GPL", "LGPL", "GPLv3", "Apache 2.0", "mit"] {
            assert!(ExpressionNode::parse(raw).is_none(), "{} should not parse", raw);
        }
    }

    #[test]
    fn test_slash_and_lower_case_operators_are_rejected() {
        assert!(ExpressionNode::parse("MIT/Apache-2.0").is_none());
        assert!(ExpressionNode::parse("MIT or Apache-2.0").is_none());
    }

    #[test]
    fn test_invalid_expression_returns_none() {
        assert!(ExpressionNode::parse("MIT OR").is_none());
        assert!(ExpressionNode::parse("").is_none());
    }

    #[test]
    fn test_gnu_variant() {
        assert_eq!(gnu_variant("GPL-2.0", false), "GPL-2.0-only");
        assert_eq!(gnu_variant("GPL-2.0", true), "GPL-2.0-or-later");
        assert_eq!(gnu_variant("GPL-2.0-only", false), "GPL-2.0-only");
        assert_eq!(gnu_variant("GPL-2.0-only", true), "GPL-2.0-or-later");
        assert_eq!(gnu_variant("GPL-2.0+", false), "GPL-2.0-or-later");
        assert_eq!(gnu_variant("AGPL-3.0-or-later", false), "AGPL-3.0-or-later");
    }
}
