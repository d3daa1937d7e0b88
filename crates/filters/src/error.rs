//! Error types for the filters crate.
//!
//! Two layers of failure exist:
//! - `ConstructionError` is raised by a transformer factory when the
//!   positional arguments do not fit its constructor
//! - `FilterError` is what descriptor operations return to the caller
//!
//! A filter name that no registry knows about is *not* an error; see
//! `FilterDescriptor::resolve`.

use thiserror::Error;

/// Raised when a factory rejects the argument list it was given.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// Number of positional arguments doesn't match the constructor
    #[error("{transformer} expects {expected} constructor argument(s) but {found} were given")]
    ArityMismatch {
        transformer: String,
        expected: usize,
        found: usize,
    },

    /// An argument had the wrong shape for its position
    #[error("Invalid argument {index} for {transformer}: expected {expected}")]
    InvalidArgument {
        transformer: String,
        index: usize,
        expected: &'static str,
    },
}

/// Errors a resource may return from a delegated call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// The resource exposes no method by this name
    #[error("Resource {resource} has no method `{method}`")]
    UnknownMethod { resource: String, method: String },

    /// The method exists but the arguments don't fit it
    #[error("Invalid arguments for `{method}`: {reason}")]
    InvalidArguments { method: String, reason: String },
}

/// Errors returned by `FilterDescriptor` operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// The resolved transformer could not be constructed
    #[error("Failed to construct filter {filter}: {source}")]
    Construction {
        filter: String,
        #[source]
        source: ConstructionError,
    },

    /// A call was delegated but no owning resource is attached
    #[error("Cannot delegate `{method}` from filter {filter}: no resource attached")]
    UnboundDelegation { filter: String, method: String },

    /// The owning resource rejected a delegated call
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
