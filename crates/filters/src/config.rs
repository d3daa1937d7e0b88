//! Declarative filter configuration.
//!
//! Lets a manifest describe filters as data:
//!
//! ```json
//! { "name": "Banner", "arguments": ["/* app */", ""], "environments": ["production"], "group": "stylesheets" }
//! ```

use crate::descriptor::FilterDescriptor;
use crate::types::AssetGroup;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serializable form of a `FilterDescriptor`, minus hooks and owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub name: String,

    #[serde(default)]
    pub arguments: Vec<Value>,

    #[serde(default)]
    pub environments: Vec<String>,

    #[serde(default)]
    pub group: Option<AssetGroup>,
}

impl FilterConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            environments: Vec::new(),
            group: None,
        }
    }

    /// Build a descriptor carrying this configuration.
    pub fn into_descriptor(self) -> FilterDescriptor {
        let mut descriptor = FilterDescriptor::new(self.name);
        descriptor
            .with_arguments(self.arguments)
            .on_environments(self.environments);
        match self.group {
            Some(AssetGroup::Stylesheets) => {
                descriptor.only_stylesheets();
            }
            Some(AssetGroup::Javascripts) => {
                descriptor.only_javascripts();
            }
            None => {}
        }
        descriptor
    }
}

impl From<&FilterDescriptor> for FilterConfig {
    fn from(descriptor: &FilterDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            arguments: descriptor.arguments().to_vec(),
            environments: descriptor.environments().to_vec(),
            group: descriptor.group_restriction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_config() {
        let config: FilterConfig = serde_json::from_str(r#"{ "name": "CssMin" }"#).unwrap();
        assert_eq!(config, FilterConfig::new("CssMin"));

        let descriptor = config.into_descriptor();
        assert_eq!(descriptor.name(), "CssMin");
        assert!(descriptor.arguments().is_empty());
        assert_eq!(descriptor.group_restriction(), None);
    }

    #[test]
    fn test_full_config() {
        let config: FilterConfig = serde_json::from_value(json!({
            "name": "Banner",
            "arguments": ["/* top */", 3],
            "environments": ["production", "staging"],
            "group": "javascripts"
        }))
        .unwrap();

        let descriptor = config.clone().into_descriptor();
        assert_eq!(descriptor.arguments(), &[json!("/* top */"), json!(3)]);
        assert_eq!(descriptor.environments(), &["production", "staging"]);
        assert_eq!(descriptor.group_restriction(), Some(AssetGroup::Javascripts));

        assert_eq!(FilterConfig::from(&descriptor), config);
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let result: Result<FilterConfig, _> =
            serde_json::from_str(r#"{ "name": "CssMin", "group": "images" }"#);
        assert!(result.is_err());
    }
}
