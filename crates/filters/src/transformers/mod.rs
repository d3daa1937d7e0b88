//! Stock transformer implementations.
//!
//! `CssMin`, `JsMin` and `Banner` are registered in the primary `builtin`
//! registry; `UriPrefix` lives in the secondary `custom` registry.

pub mod banner;
pub mod css_min;
pub mod js_min;
pub mod uri_prefix;

// Re-export for convenience
pub use banner::BannerTransformer;
pub use css_min::CssMinTransformer;
pub use js_min::JsMinTransformer;
pub use uri_prefix::UriPrefixTransformer;

use crate::factory::{string_arg, TransformerFactory};
use crate::registry::TransformerRegistry;

/// Registry holding the transformers every build has available.
pub fn builtin_registry() -> TransformerRegistry {
    let mut registry = TransformerRegistry::new("builtin");
    registry.register(
        "CssMin",
        TransformerFactory::without_constructor("CssMin", CssMinTransformer::default),
    );
    registry.register(
        "JsMin",
        TransformerFactory::without_constructor("JsMin", JsMinTransformer::default),
    );
    registry.register(
        "Banner",
        TransformerFactory::with_constructor("Banner", 2, |args| {
            Ok(BannerTransformer::new(
                string_arg("Banner", args, 0)?,
                string_arg("Banner", args, 1)?,
            ))
        }),
    );
    registry
}

/// Registry for project-local transformers, consulted after the builtins.
pub fn custom_registry() -> TransformerRegistry {
    let mut registry = TransformerRegistry::new("custom");
    registry.register(
        "UriPrefix",
        TransformerFactory::with_constructor("UriPrefix", 1, |args| {
            Ok(UriPrefixTransformer::new(string_arg("UriPrefix", args, 0)?))
        }),
    );
    registry
}
