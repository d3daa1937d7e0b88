//! Error types for the pipeline crate.

use filters::FilterError;
use thiserror::Error;

/// Errors raised while building an asset.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A filter could not be resolved into a transformer
    #[error("Filter {filter} failed on {path}: {source}")]
    Filter {
        path: String,
        filter: String,
        #[source]
        source: FilterError,
    },

    /// A transformer returned an error while processing content
    #[error("Transformer {filter} failed on {path}: {reason}")]
    Transform {
        path: String,
        filter: String,
        reason: String,
    },
}

/// Errors raised while loading an asset manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON or has the wrong shape
    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// No group given and none can be inferred from the extension
    #[error("Cannot infer asset group for {path}")]
    UnknownGroup { path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, BuildError>;
