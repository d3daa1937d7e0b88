//! Small value types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The asset groups a filter can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetGroup {
    Stylesheets,
    Javascripts,
}

impl AssetGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetGroup::Stylesheets => "stylesheets",
            AssetGroup::Javascripts => "javascripts",
        }
    }

    /// Parse a group name as used in manifests and on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stylesheets" | "css" => Some(AssetGroup::Stylesheets),
            "javascripts" | "js" => Some(AssetGroup::Javascripts),
            _ => None,
        }
    }
}

impl fmt::Display for AssetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter name qualified by the registry namespace it was found in,
/// e.g. `builtin::CssMin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_parse() {
        assert_eq!(AssetGroup::parse("stylesheets"), Some(AssetGroup::Stylesheets));
        assert_eq!(AssetGroup::parse("JS"), Some(AssetGroup::Javascripts));
        assert_eq!(AssetGroup::parse("images"), None);
    }

    #[test]
    fn test_group_serde_lowercase() {
        let group: AssetGroup = serde_json::from_str("\"javascripts\"").unwrap();
        assert_eq!(group, AssetGroup::Javascripts);
        assert_eq!(
            serde_json::to_string(&AssetGroup::Stylesheets).unwrap(),
            "\"stylesheets\""
        );
    }

    #[test]
    fn test_qualified_name_display() {
        let name = QualifiedName::new("builtin", "CssMin");
        assert_eq!(name.to_string(), "builtin::CssMin");
    }
}
