//! Wraps content between a header and a footer.

use crate::traits::Transformer;
use anyhow::Result;
use std::any::Any;

/// Prepends `header` and appends `footer`, joined by a separator
/// (a newline unless a hook changes it).
#[derive(Debug, Clone)]
pub struct BannerTransformer {
    header: String,
    footer: String,
    separator: String,
}

impl BannerTransformer {
    /// Create a new BannerTransformer.
    ///
    /// # Arguments
    /// * `header` - Text placed before the content
    /// * `footer` - Text placed after the content
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
            separator: "\n".to_string(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }
}

impl Transformer for BannerTransformer {
    fn name(&self) -> &str {
        "Banner"
    }

    fn transform(&self, content: String) -> Result<String> {
        let mut parts = Vec::with_capacity(3);
        if !self.header.is_empty() {
            parts.push(self.header.as_str());
        }
        parts.push(content.as_str());
        if !self.footer.is_empty() {
            parts.push(self.footer.as_str());
        }
        Ok(parts.join(&self.separator))
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let filter = BannerTransformer::new("/* v1 */", "/* end */");
        let out = filter.transform("a{}".to_string()).unwrap();

        assert_eq!(out, "/* v1 */\na{}\n/* end */");
    }

    #[test]
    fn test_banner_empty_footer_and_separator() {
        let mut filter = BannerTransformer::new("// top", "");
        filter.set_separator(" ");

        let out = filter.transform("run();".to_string()).unwrap();

        assert_eq!(out, "// top run();");
    }
}
