//! Core traits at the edges of a filter descriptor.
//!
//! A descriptor resolves to a `Transformer` and belongs to a `Resource`.
//! Both are trait objects so the surrounding system can supply its own.

use crate::error::ResourceError;
use anyhow::Result;
use serde_json::Value;
use std::any::Any;

/// The object that performs the actual content transformation once a
/// filter name has been resolved.
///
/// ## Design Note
/// - `Send + Sync` lets several assets be built in parallel
/// - `as_any_mut` lets pre-instantiation hooks downcast to the concrete
///   type and adjust its settings before it is handed out
pub trait Transformer: Send + Sync {
    /// Returns the name of this transformer (for logging/debugging)
    fn name(&self) -> &str;

    /// Transform the content of a resource.
    ///
    /// # Arguments
    /// * `content` - The current content (takes ownership)
    ///
    /// # Returns
    /// * `Ok(String)` - The transformed content
    /// * `Err` - If the content could not be transformed
    fn transform(&self, content: String) -> Result<String>;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Capability set of the asset a filter is attached to.
///
/// `invoke` is the explicit escape hatch for calls a descriptor forwards to
/// its owner. Unknown methods must come back as
/// `ResourceError::UnknownMethod` rather than panicking.
pub trait Resource: Send + Sync {
    /// Identifier of the resource, usually its path
    fn identifier(&self) -> &str;

    fn invoke(&self, method: &str, args: &[Value]) -> std::result::Result<Value, ResourceError>;
}
