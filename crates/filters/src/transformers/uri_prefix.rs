//! Rewrites relative `url(...)` references in stylesheets.

use crate::traits::Transformer;
use anyhow::Result;
use std::any::Any;

/// Prefixes every relative `url()` target with a fixed path.
///
/// Absolute paths (`/`), protocol-relative (`//`), `http:`, `https:` and
/// `data:` targets are left unchanged.
#[derive(Debug, Clone)]
pub struct UriPrefixTransformer {
    prefix: String,
}

impl UriPrefixTransformer {
    /// Create a new UriPrefixTransformer. A trailing `/` is added to
    /// `prefix` when missing.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

fn is_relative(target: &str) -> bool {
    !(target.starts_with('/')
        || target.starts_with("http:")
        || target.starts_with("https:")
        || target.starts_with("data:"))
}

impl Transformer for UriPrefixTransformer {
    fn name(&self) -> &str {
        "UriPrefix"
    }

    fn transform(&self, content: String) -> Result<String> {
        let mut out = String::with_capacity(content.len());
        let mut rest = content.as_str();

        while let Some(pos) = rest.find("url(") {
            let (head, tail) = rest.split_at(pos + 4);
            out.push_str(head);

            let trimmed = tail.trim_start();
            out.push_str(&tail[..tail.len() - trimmed.len()]);

            let (quote, target) = match trimmed.chars().next() {
                Some(q @ ('"' | '\'')) => (Some(q), &trimmed[1..]),
                _ => (None, trimmed),
            };
            if let Some(q) = quote {
                out.push(q);
            }
            if is_relative(target) {
                out.push_str(&self.prefix);
            }
            rest = target;
        }
        out.push_str(rest);

        Ok(out)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_prefix() {
        let css = "a{background:url(img/a.png)}b{background:url( 'b.png' )}".to_string();

        let filter = UriPrefixTransformer::new("/assets");
        let out = filter.transform(css).unwrap();

        assert_eq!(
            out,
            "a{background:url(/assets/img/a.png)}b{background:url( '/assets/b.png' )}"
        );
    }

    #[test]
    fn test_uri_prefix_skips_absolute() {
        let css = "a{x:url(\"/abs.png\")}b{x:url(https://cdn/x.png)}c{x:url(data:image/png;base64,AA)}"
            .to_string();

        let out = UriPrefixTransformer::new("/assets/").transform(css.clone()).unwrap();

        assert_eq!(out, css);
    }
}
