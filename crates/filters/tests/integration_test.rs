//! Integration tests for the filters crate.
//!
//! These tests resolve descriptors against the default registries and run
//! the resulting transformers over realistic content.

use filters::transformers::{BannerTransformer, CssMinTransformer};
use filters::{
    AssetGroup, ConstructionError, FilterConfig, FilterDescriptor, FilterError, FilterResolver,
    QualifiedName, TransformerFactory,
};
use serde_json::json;

const STYLESHEET: &str = "/* layout */\n.hero {\n  background: url(img/hero.png);\n  color: #333;\n}\n";

fn run(descriptors: &[FilterDescriptor], resolver: &FilterResolver, content: &str) -> String {
    let mut current = content.to_string();
    for descriptor in descriptors {
        if let Some(transformer) = descriptor.resolve(resolver).unwrap() {
            current = transformer.transform(current).unwrap();
        }
    }
    current
}

/// Route `tracing` output through the test harness.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_stock_chain_over_stylesheet() {
    init_tracing();
    let resolver = FilterResolver::default();

    let mut uri = FilterDescriptor::new("UriPrefix");
    uri.with_arguments(["/assets"]).only_stylesheets();

    let mut min = FilterDescriptor::new("CssMin");
    min.only_stylesheets();

    let mut banner = FilterDescriptor::new("Banner");
    banner.with_arguments(["/* site */", ""]);

    let out = run(&[uri, min, banner], &resolver, STYLESHEET);

    assert_eq!(
        out,
        "/* site */\n.hero{background:url(/assets/img/hero.png);color:#333}"
    );
}

#[test]
fn test_unknown_filter_is_skipped() {
    let resolver = FilterResolver::default();

    let misspelled = FilterDescriptor::new("CssMinn");
    let min = FilterDescriptor::new("CssMin");

    assert_eq!(misspelled.resolve_type_name(&resolver), None);
    assert_eq!(
        min.resolve_type_name(&resolver),
        Some(QualifiedName::new("builtin", "CssMin"))
    );

    let out = run(&[misspelled, min], &resolver, "a { b: c; }");
    assert_eq!(out, "a{b:c}");
}

#[test]
fn test_custom_registration_does_not_override_builtin() {
    let mut resolver = FilterResolver::default();
    resolver.custom_mut().register(
        "Banner",
        TransformerFactory::without_constructor("Banner", CssMinTransformer::default),
    );

    let mut banner = FilterDescriptor::new("Banner");
    banner.with_arguments(["top", "bottom"]);

    let transformer = banner.resolve(&resolver).unwrap().unwrap();
    assert_eq!(
        transformer.transform("mid".to_string()).unwrap(),
        "top\nmid\nbottom"
    );
}

#[test]
fn test_wrongly_typed_argument() {
    let resolver = FilterResolver::default();

    let mut uri = FilterDescriptor::new("UriPrefix");
    uri.with_arguments([json!({ "prefix": "/assets" })]);

    match uri.resolve(&resolver) {
        Err(FilterError::Construction {
            source: ConstructionError::InvalidArgument { index, .. },
            ..
        }) => assert_eq!(index, 0),
        other => panic!("expected construction error, got {:?}", other.map(|t| t.is_some())),
    }
}

#[test]
fn test_config_driven_descriptor_with_hook() {
    let resolver = FilterResolver::default();

    let config: FilterConfig = serde_json::from_value(json!({
        "name": "Banner",
        "arguments": ["// v2", "// eof"],
        "environments": ["production"],
        "group": "javascripts"
    }))
    .unwrap();

    let mut descriptor = config.into_descriptor();
    descriptor.before_filtering(|transformer| {
        if let Some(banner) = transformer.as_any_mut().downcast_mut::<BannerTransformer>() {
            banner.set_separator("\n\n");
        }
    });

    assert!(descriptor.applies_to("production", AssetGroup::Javascripts));
    assert!(!descriptor.applies_to("production", AssetGroup::Stylesheets));

    let transformer = descriptor.resolve(&resolver).unwrap().unwrap();
    assert_eq!(
        transformer.transform("run();".to_string()).unwrap(),
        "// v2\n\nrun();\n\n// eof"
    );
}
