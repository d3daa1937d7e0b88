//! Build pipeline that runs asset filters.
//!
//! This crate provides:
//! - `Asset`, a resource that owns its filter descriptors
//! - `BuildContext` for environment and group selection
//! - `FilterPipeline` for resolving and running filters over assets
//! - `Manifest` for declaring assets and filters in JSON
//!
//! ## Architecture
//! A build processes each asset in stages:
//! 1. Descriptors are registered on the asset (directly or from a manifest)
//! 2. The context selects the descriptors that apply to this build
//! 3. Each selected descriptor is resolved to a transformer and run in order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Asset, BuildContext, FilterPipeline};
//! use filters::{AssetGroup, FilterDescriptor, FilterResolver};
//!
//! let asset = Asset::new("site.css", AssetGroup::Stylesheets, css);
//! asset.apply_filter("CssMin", Some(|f: &mut FilterDescriptor| {
//!     f.on_environment("production");
//! }));
//!
//! let pipeline = FilterPipeline::new(FilterResolver::default());
//! let built = pipeline.apply(&asset, &BuildContext::new("production"))?;
//! ```

pub mod asset;
pub mod context;
pub mod error;
pub mod filter_pipeline;
pub mod manifest;

// Re-export main types
pub use asset::Asset;
pub use context::BuildContext;
pub use error::{BuildError, ManifestError, Result};
pub use filter_pipeline::{BuiltAsset, FilterPipeline, PlannedFilter};
pub use manifest::{AssetEntry, Manifest};
