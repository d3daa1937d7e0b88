//! A single named filter entry attached to an asset.
//!
//! A `FilterDescriptor` is configuration only: which transformer to
//! build, with which constructor arguments, under which environments and
//! asset group, plus hooks to run on the fresh instance. It turns into a
//! transformer when `resolve` is called, and every call builds a new one.

use crate::error::{FilterError, Result};
use crate::registry::FilterResolver;
use crate::traits::{Resource, Transformer};
use crate::types::{AssetGroup, QualifiedName};
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Callback run on a transformer right after it is constructed.
pub type BeforeFilteringHook = Box<dyn Fn(&mut dyn Transformer) + Send + Sync>;

/// Declarative record of one filter applied to a resource.
///
/// ## Usage
/// ```ignore
/// let mut filter = FilterDescriptor::new("Banner");
/// filter
///     .with_arguments(["/* app */", ""])
///     .on_environment("production")
///     .only_stylesheets();
///
/// if let Some(transformer) = filter.resolve(&resolver)? {
///     content = transformer.transform(content)?;
/// }
/// ```
pub struct FilterDescriptor {
    name: String,
    arguments: Vec<Value>,
    before: Vec<BeforeFilteringHook>,
    environments: Vec<String>,
    group_restriction: Option<AssetGroup>,
    resource: Option<Weak<dyn Resource>>,
}

impl FilterDescriptor {
    /// Create a descriptor for the filter called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            before: Vec::new(),
            environments: Vec::new(),
            group_restriction: None,
            resource: None,
        }
    }

    /// Register a hook to run on each new transformer instance, after
    /// construction and before it is returned from `resolve`.
    pub fn before_filtering<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut dyn Transformer) + Send + Sync + 'static,
    {
        self.before.push(Box::new(hook));
        self
    }

    /// Append constructor arguments after any already set.
    pub fn with_arguments<I, V>(&mut self, arguments: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Add an environment the filter applies in.
    pub fn on_environment(&mut self, environment: impl Into<String>) -> &mut Self {
        self.environments.push(environment.into());
        self
    }

    /// Add several environments, in order. Duplicates are kept.
    pub fn on_environments<I, S>(&mut self, environments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environments
            .extend(environments.into_iter().map(Into::into));
        self
    }

    /// Apply the filter to stylesheets only. Replaces any earlier restriction.
    pub fn only_stylesheets(&mut self) -> &mut Self {
        self.group_restriction = Some(AssetGroup::Stylesheets);
        self
    }

    /// Apply the filter to javascripts only. Replaces any earlier restriction.
    pub fn only_javascripts(&mut self) -> &mut Self {
        self.group_restriction = Some(AssetGroup::Javascripts);
        self
    }

    /// Attach the owning resource. Only a weak reference is kept.
    pub fn set_resource<R>(&mut self, resource: &Arc<R>) -> &mut Self
    where
        R: Resource + 'static,
    {
        let resource: Arc<dyn Resource> = resource.clone();
        self.resource = Some(Arc::downgrade(&resource));
        self
    }

    /// The owning resource, if one is attached and still alive.
    pub fn resource(&self) -> Option<Arc<dyn Resource>> {
        self.resource.as_ref().and_then(Weak::upgrade)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_restriction(&self) -> Option<AssetGroup> {
        self.group_restriction
    }

    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Number of registered before-filtering hooks
    pub fn hook_count(&self) -> usize {
        self.before.len()
    }

    /// Run an ad-hoc callback with this descriptor. `None` does nothing.
    pub fn fire_callback<F>(&mut self, callback: Option<F>) -> &mut Self
    where
        F: FnOnce(&mut FilterDescriptor),
    {
        if let Some(callback) = callback {
            callback(self);
        }
        self
    }

    /// Whether this filter should run for `environment` and `group`.
    ///
    /// An empty environment list matches every environment and a missing
    /// group restriction matches every group.
    pub fn applies_to(&self, environment: &str, group: AssetGroup) -> bool {
        let environment_matches =
            self.environments.is_empty() || self.environments.iter().any(|e| e == environment);
        let group_matches = self.group_restriction.is_none_or(|g| g == group);
        environment_matches && group_matches
    }

    /// Qualified name of the transformer this filter resolves to, looked
    /// up in the resolver's registries in priority order.
    pub fn resolve_type_name(&self, resolver: &FilterResolver) -> Option<QualifiedName> {
        resolver.resolve_type_name(&self.name)
    }

    /// Build a fresh transformer for this filter.
    ///
    /// # Returns
    /// * `Ok(Some(_))` - The constructed instance, with every hook applied
    /// * `Ok(None)` - No registry defines this filter name
    /// * `Err(FilterError::Construction)` - The arguments don't fit the constructor
    pub fn resolve(&self, resolver: &FilterResolver) -> Result<Option<Box<dyn Transformer>>> {
        let Some((qualified, factory)) = resolver.lookup(&self.name) else {
            debug!("No transformer registered for filter {}", self.name);
            return Ok(None);
        };

        let mut instance =
            factory
                .construct(&self.arguments)
                .map_err(|source| FilterError::Construction {
                    filter: self.name.clone(),
                    source,
                })?;

        for hook in &self.before {
            hook(instance.as_mut());
        }

        trace!(
            "Resolved filter {} to {} ({} hook(s))",
            self.name,
            qualified,
            self.before.len()
        );
        Ok(Some(instance))
    }

    /// Forward a call the descriptor doesn't handle to its owning resource.
    ///
    /// The resource's result is returned unchanged.
    pub fn delegate(&self, method: &str, args: &[Value]) -> Result<Value> {
        let resource = self.resource().ok_or_else(|| FilterError::UnboundDelegation {
            filter: self.name.clone(),
            method: method.to_string(),
        })?;
        Ok(resource.invoke(method, args)?)
    }
}

impl fmt::Debug for FilterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterDescriptor")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("hooks", &self.before.len())
            .field("environments", &self.environments)
            .field("group_restriction", &self.group_restriction)
            .field(
                "resource",
                &self.resource().map(|r| r.identifier().to_string()),
            )
            .finish()
    }
}
