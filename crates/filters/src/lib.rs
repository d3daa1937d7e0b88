//! # Filters Crate
//!
//! Describes which transformation runs on an asset and turns that
//! description into a transformer instance on demand.
//!
//! ## Main Components
//!
//! - **descriptor**: `FilterDescriptor`, the per-asset filter record
//! - **registry**: name-to-factory registries and the ordered `FilterResolver`
//! - **factory**: `TransformerFactory`, how positional arguments become an instance
//! - **traits**: `Transformer` and `Resource` seams
//! - **transformers**: stock transformers (CssMin, JsMin, Banner, UriPrefix)
//! - **config**: serde form of a descriptor
//! - **error**: error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use filters::{FilterDescriptor, FilterResolver};
//!
//! let resolver = FilterResolver::default();
//!
//! let mut filter = FilterDescriptor::new("CssMin");
//! filter.on_environment("production").only_stylesheets();
//!
//! match filter.resolve(&resolver)? {
//!     Some(transformer) => css = transformer.transform(css)?,
//!     None => tracing::warn!("unknown filter {}", filter.name()),
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod registry;
pub mod traits;
pub mod transformers;
pub mod types;

// Re-export commonly used types for convenience
pub use config::FilterConfig;
pub use descriptor::{BeforeFilteringHook, FilterDescriptor};
pub use error::{ConstructionError, FilterError, ResourceError, Result};
pub use factory::{Signature, TransformerFactory};
pub use registry::{FilterResolver, TransformerRegistry};
pub use traits::{Resource, Transformer};
pub use types::{AssetGroup, QualifiedName};
