use anyhow::{Context, Result};
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filters::{AssetGroup, FilterResolver};
use pipeline::{Asset, BuildContext, FilterPipeline, Manifest};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// asset-filters - run stylesheet and script filters from a manifest
#[derive(Parser)]
#[command(name = "asset-filters")]
#[command(about = "Resolve and run asset filters declared in a JSON manifest", long_about = None)]
struct Cli {
    /// Path to the asset manifest
    #[arg(short, long, default_value = "assets.json")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which filters apply to each asset and what they resolve to
    List {
        /// Environment to build for
        #[arg(long, default_value = "local")]
        env: String,

        /// Only consider one group
        #[arg(long, value_parser = group_parser())]
        group: Option<AssetGroup>,
    },

    /// Run the filters and print the resulting content
    Build {
        /// Environment to build for
        #[arg(long, default_value = "local")]
        env: String,

        /// Only consider one group
        #[arg(long, value_parser = group_parser())]
        group: Option<AssetGroup>,
    },

    /// List the transformers every registry provides
    Transformers,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = FilterPipeline::new(FilterResolver::default());

    match cli.command {
        Commands::List { env, group } => {
            let assets = load_assets(&cli.manifest)?;
            handle_list(&pipeline, &assets, build_context(env, group))
        }
        Commands::Build { env, group } => {
            let assets = load_assets(&cli.manifest)?;
            handle_build(&pipeline, &assets, build_context(env, group))
        }
        Commands::Transformers => {
            handle_transformers(pipeline.resolver());
            Ok(())
        }
    }
}

/// Accepts the group names and their short forms, case-sensitively.
fn group_parser() -> impl TypedValueParser<Value = AssetGroup> {
    PossibleValuesParser::new(["stylesheets", "javascripts", "css", "js"])
        .try_map(|name| AssetGroup::parse(&name).ok_or_else(|| format!("unknown group {}", name)))
}

fn build_context(env: String, group: Option<AssetGroup>) -> BuildContext {
    let context = BuildContext::new(env);
    match group {
        Some(group) => context.with_group(group),
        None => context,
    }
}

fn load_assets(manifest: &Path) -> Result<Vec<Arc<Asset>>> {
    let start = Instant::now();
    let base_dir = manifest.parent().unwrap_or_else(|| Path::new("."));
    let assets = Manifest::load(manifest)
        .and_then(|m| m.into_assets(base_dir))
        .with_context(|| format!("Failed to load manifest {}", manifest.display()))?;
    tracing::info!("Loaded {} asset(s) in {:?}", assets.len(), start.elapsed());
    Ok(assets)
}

/// Handle the 'list' command
fn handle_list(pipeline: &FilterPipeline, assets: &[Arc<Asset>], context: BuildContext) -> Result<()> {
    println!(
        "{} {}",
        "Environment:".bold(),
        context.environment.cyan()
    );
    for asset in assets {
        if !context.includes(asset.group()) {
            continue;
        }
        println!("\n{} [{}]", asset.path().bold(), asset.group());
        let plan = pipeline.plan(asset, &context);
        if plan.is_empty() {
            println!("  {}", "(no filters)".dimmed());
        }
        for filter in plan {
            match filter.resolved {
                Some(qualified) => println!("  {} {} -> {}", "✓".green(), filter.name, qualified),
                None => println!("  {} {} -> {}", "✗".red(), filter.name, "not found".red()),
            }
        }
    }
    Ok(())
}

/// Handle the 'build' command
fn handle_build(pipeline: &FilterPipeline, assets: &[Arc<Asset>], context: BuildContext) -> Result<()> {
    let start = Instant::now();
    let results = pipeline.apply_all(assets, &context);

    let mut built_count = 0;
    for result in results {
        let built = result?;
        if !context.includes(built.group) {
            continue;
        }
        built_count += 1;
        println!("{} {}", "==>".blue().bold(), built.path.bold());
        for name in &built.unresolved {
            println!("{} unknown filter {}", "warning:".yellow(), name);
        }
        println!("{}", built.content);
    }

    tracing::info!("Built {} asset(s) in {:?}", built_count, start.elapsed());
    Ok(())
}

/// Handle the 'transformers' command
fn handle_transformers(resolver: &FilterResolver) {
    for registry in resolver.registries() {
        println!("{}", registry.namespace().bold());
        for name in registry.names() {
            println!("  {}", name);
        }
    }
}
