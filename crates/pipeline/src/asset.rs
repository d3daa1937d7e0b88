//! Assets and the filters registered on them.
//!
//! An `Asset` owns its `FilterDescriptor`s and each descriptor holds a
//! weak back-reference to the asset, so neither keeps the other alive.
//! Descriptors are frozen once registered and shared as `Arc`s, which lets
//! readers work on a snapshot of the list without holding its lock.

use filters::{AssetGroup, FilterDescriptor, Resource, ResourceError};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, Weak};
use tracing::debug;

/// A stylesheet or script plus the filters to run over it.
#[derive(Debug)]
pub struct Asset {
    path: String,
    group: AssetGroup,
    content: String,
    filters: RwLock<Vec<Arc<FilterDescriptor>>>,
    this: Weak<Asset>,
}

impl Asset {
    /// Create a new asset.
    ///
    /// # Arguments
    /// * `path` - Identifier of the asset, usually its relative path
    /// * `group` - Group the asset belongs to
    /// * `content` - Raw source of the asset
    pub fn new(path: impl Into<String>, group: AssetGroup, content: impl Into<String>) -> Arc<Self> {
        let path = path.into();
        let content = content.into();
        Arc::new_cyclic(|this| Self {
            path,
            group,
            content,
            filters: RwLock::new(Vec::new()),
            this: this.clone(),
        })
    }

    /// Infer the group from a file extension (`.css` or `.js`).
    pub fn group_for_path(path: &str) -> Option<AssetGroup> {
        match Path::new(path).extension()?.to_str()? {
            "css" | "less" | "scss" => Some(AssetGroup::Stylesheets),
            "js" | "mjs" => Some(AssetGroup::Javascripts),
            _ => None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn group(&self) -> AssetGroup {
        self.group
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Register a filter by name, optionally configuring it with `callback`.
    ///
    /// The descriptor is attached to this asset before the callback runs.
    pub fn apply_filter<F>(&self, name: impl Into<String>, callback: Option<F>)
    where
        F: FnOnce(&mut FilterDescriptor),
    {
        let mut descriptor = FilterDescriptor::new(name);
        self.attach(&mut descriptor);
        descriptor.fire_callback(callback);
        self.push(descriptor);
    }

    /// Register an already configured descriptor.
    pub fn add_filter(&self, mut descriptor: FilterDescriptor) {
        self.attach(&mut descriptor);
        self.push(descriptor);
    }

    /// Run `f` over the registered descriptors, in registration order.
    ///
    /// `f` sees the list as it was when the call started. The lock is
    /// released before `f` runs, so `f` may delegate back into this asset,
    /// including `apply`; filters registered that way show up on the next
    /// call.
    pub fn with_filters<R>(&self, f: impl FnOnce(&[Arc<FilterDescriptor>]) -> R) -> R {
        let snapshot = self.read_filters().clone();
        f(&snapshot)
    }

    pub fn filter_names(&self) -> Vec<String> {
        self.read_filters()
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }

    fn attach(&self, descriptor: &mut FilterDescriptor) {
        if let Some(this) = self.this.upgrade() {
            descriptor.set_resource(&this);
        }
    }

    fn read_filters(&self) -> RwLockReadGuard<'_, Vec<Arc<FilterDescriptor>>> {
        self.filters.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, descriptor: FilterDescriptor) {
        debug!("Registered filter {} on {}", descriptor.name(), self.path);
        self.filters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(descriptor));
    }

    fn invalid(method: &str, reason: &str) -> ResourceError {
        ResourceError::InvalidArguments {
            method: method.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Resource for Asset {
    fn identifier(&self) -> &str {
        &self.path
    }

    /// Methods reachable through `FilterDescriptor::delegate`:
    /// `path`, `group`, `content`, `filters` and
    /// `apply(name, ...arguments)`.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, ResourceError> {
        match method {
            "path" => Ok(json!(self.path)),
            "group" => Ok(json!(self.group.as_str())),
            "content" => Ok(json!(self.content)),
            "filters" => Ok(json!(self.filter_names())),
            "apply" => {
                let (name, arguments) = args
                    .split_first()
                    .ok_or_else(|| Self::invalid(method, "missing filter name"))?;
                let name = name
                    .as_str()
                    .ok_or_else(|| Self::invalid(method, "filter name must be a string"))?;
                self.apply_filter(
                    name,
                    Some(|f: &mut FilterDescriptor| {
                        f.with_arguments(arguments.iter().cloned());
                    }),
                );
                Ok(Value::Null)
            }
            _ => Err(ResourceError::UnknownMethod {
                resource: self.path.clone(),
                method: method.to_string(),
            }),
        }
    }
}
