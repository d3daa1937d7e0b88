//! The FilterPipeline runs an asset's filters for one build.
//!
//! For each asset it selects the descriptors that apply to the build
//! context, resolves each into a transformer and threads the content
//! through them in registration order.

use crate::asset::Asset;
use crate::context::BuildContext;
use crate::error::{BuildError, Result};
use filters::{AssetGroup, FilterResolver, QualifiedName};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Content of an asset after its filters have run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltAsset {
    pub path: String,
    pub group: AssetGroup,
    pub content: String,
    /// Transformers that ran, in order
    pub applied: Vec<QualifiedName>,
    /// Applicable filters whose name no registry knows
    pub unresolved: Vec<String>,
}

/// One applicable filter and what its name resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFilter {
    pub name: String,
    pub resolved: Option<QualifiedName>,
}

/// Applies asset filters using a shared resolver.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new(FilterResolver::default());
/// let built = pipeline.apply(&asset, &BuildContext::new("production"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    resolver: FilterResolver,
}

impl FilterPipeline {
    pub fn new(resolver: FilterResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &FilterResolver {
        &self.resolver
    }

    /// Filters that would run on `asset` in `context`, with their resolution.
    pub fn plan(&self, asset: &Asset, context: &BuildContext) -> Vec<PlannedFilter> {
        asset.with_filters(|filters| {
            filters
                .iter()
                .filter(|filter| context.selects(filter, asset.group()))
                .map(|filter| PlannedFilter {
                    name: filter.name().to_string(),
                    resolved: filter.resolve_type_name(&self.resolver),
                })
                .collect()
        })
    }

    /// Run every applicable filter over the asset's content.
    ///
    /// ## Algorithm
    /// 1. Start with the raw content
    /// 2. For each descriptor selected by the context, in order:
    ///    a. Resolve it; skip with a warning if the name is unknown
    ///    b. Transform the current content
    /// 3. Return the final content and what ran
    ///
    /// # Returns
    /// * `Ok(BuiltAsset)` - The transformed asset
    /// * `Err` - If a transformer can't be constructed or fails
    #[instrument(skip(self, asset, context), fields(path = asset.path(), env = %context.environment))]
    pub fn apply(&self, asset: &Asset, context: &BuildContext) -> Result<BuiltAsset> {
        let mut built = BuiltAsset {
            path: asset.path().to_string(),
            group: asset.group(),
            content: asset.content().to_string(),
            applied: Vec::new(),
            unresolved: Vec::new(),
        };

        if !context.includes(asset.group()) {
            return Ok(built);
        }

        asset.with_filters(|filters| -> Result<BuiltAsset> {
            for filter in filters.iter().filter(|f| context.selects(f, asset.group())) {
                let transformer =
                    filter
                        .resolve(&self.resolver)
                        .map_err(|source| BuildError::Filter {
                            path: built.path.clone(),
                            filter: filter.name().to_string(),
                            source,
                        })?;

                let Some(transformer) = transformer else {
                    warn!("Skipping unknown filter {} on {}", filter.name(), built.path);
                    built.unresolved.push(filter.name().to_string());
                    continue;
                };

                debug!(
                    "Applying filter: {} (input length: {})",
                    transformer.name(),
                    built.content.len()
                );
                let content = std::mem::take(&mut built.content);
                built.content =
                    transformer
                        .transform(content)
                        .map_err(|err| BuildError::Transform {
                            path: built.path.clone(),
                            filter: filter.name().to_string(),
                            reason: format!("{:#}", err),
                        })?;

                if let Some(qualified) = filter.resolve_type_name(&self.resolver) {
                    built.applied.push(qualified);
                }
            }
            Ok(built)
        })
    }

    /// Build several assets in parallel. Results keep the input order.
    pub fn apply_all(&self, assets: &[Arc<Asset>], context: &BuildContext) -> Vec<Result<BuiltAsset>> {
        assets
            .par_iter()
            .map(|asset| self.apply(asset, context))
            .collect()
    }
}
