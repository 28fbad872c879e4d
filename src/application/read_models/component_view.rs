//! Component view for report listings

use serde::Serialize;

/// View representation of a package in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentView {
    pub name: String,
    pub version: String,
    /// Package identifier (`type/name@version`)
    pub purl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Canonical license ids, ascending
    pub licenses: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub copyright: String,
}
