//! Integration tests for the pipeline.
//!
//! These tests verify that manifests, assets and the filter pipeline work
//! together in a realistic scenario.

use filters::transformers::{BannerTransformer, JsMinTransformer};
use filters::{AssetGroup, FilterDescriptor, FilterResolver, QualifiedName, TransformerFactory};
use pipeline::{Asset, BuildContext, FilterPipeline, Manifest};
use std::path::Path;

const MANIFEST: &str = r#"{
    "assets": [
        {
            "path": "css/site.css",
            "content": "/* site */\n.nav {\n  background: url(img/bar.png);\n}\n",
            "filters": [
                { "name": "UriPrefix", "arguments": ["/static"] },
                { "name": "CssMin", "environments": ["production"] },
                { "name": "JsMin", "group": "javascripts" }
            ]
        },
        {
            "path": "js/app.js",
            "content": "// boot\nstart();\n",
            "filters": [
                { "name": "JsMin", "environments": ["production", "staging"] },
                { "name": "Banner", "arguments": ["/* app */", ""], "group": "javascripts" },
                { "name": "Uglify" }
            ]
        }
    ]
}"#;

/// Route `tracing` output through the test harness.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_manifest_build_production() {
    init_tracing();
    let assets = Manifest::parse(MANIFEST)
        .unwrap()
        .into_assets(Path::new("."))
        .unwrap();
    let pipeline = FilterPipeline::new(FilterResolver::default());

    let results = pipeline.apply_all(&assets, &BuildContext::new("production"));
    let built: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();

    assert_eq!(built[0].path, "css/site.css");
    assert_eq!(built[0].content, ".nav{background:url(/static/img/bar.png)}");
    assert_eq!(
        built[0].applied,
        vec![
            QualifiedName::new("custom", "UriPrefix"),
            QualifiedName::new("builtin", "CssMin"),
        ]
    );

    assert_eq!(built[1].content, "/* app */\nstart();");
    assert_eq!(built[1].unresolved, vec!["Uglify"]);
}

#[test]
fn test_manifest_build_local() {
    let assets = Manifest::parse(MANIFEST)
        .unwrap()
        .into_assets(Path::new("."))
        .unwrap();
    let pipeline = FilterPipeline::default();
    let context = BuildContext::new("local");

    let plan = pipeline.plan(&assets[1], &context);
    let names: Vec<&str> = plan.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Banner", "Uglify"]);

    let built = pipeline.apply(&assets[1], &context).unwrap();
    assert_eq!(built.content, "/* app */\n// boot\nstart();\n");
}

#[test]
fn test_custom_transformer_and_hooks() {
    let mut resolver = FilterResolver::default();
    resolver.custom_mut().register(
        "StripDebug",
        TransformerFactory::without_constructor("StripDebug", JsMinTransformer::default),
    );
    let pipeline = FilterPipeline::new(resolver);

    let asset = Asset::new("js/app.js", AssetGroup::Javascripts, "debug(); // x\ngo();");
    asset.apply_filter("StripDebug", None::<fn(&mut FilterDescriptor)>);
    asset.apply_filter("Banner", Some(|f: &mut FilterDescriptor| {
        f.with_arguments(["/*!", "*/"]).before_filtering(|t| {
            if let Some(banner) = t.as_any_mut().downcast_mut::<BannerTransformer>() {
                banner.set_separator(" ");
            }
        });
    }));

    let built = pipeline.apply(&asset, &BuildContext::new("local")).unwrap();
    assert_eq!(built.content, "/*! debug();\ngo(); */");
    assert_eq!(
        built.applied,
        vec![
            QualifiedName::new("custom", "StripDebug"),
            QualifiedName::new("builtin", "Banner"),
        ]
    );
}
