//! Name-to-factory registries and the ordered resolver over them.
//!
//! A `FilterResolver` holds registries in priority order. Looking up a
//! filter name walks them front to back and stops at the first registry
//! that knows the name, so builtins shadow custom transformers that share
//! the same short name.

use crate::factory::TransformerFactory;
use crate::transformers::{builtin_registry, custom_registry};
use crate::types::QualifiedName;
use std::collections::HashMap;

/// Factories registered under one namespace.
#[derive(Debug, Clone)]
pub struct TransformerRegistry {
    namespace: String,
    factories: HashMap<String, TransformerFactory>,
}

impl TransformerRegistry {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            factories: HashMap::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Register a factory, replacing any previous one under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: TransformerFactory) -> &mut Self {
        self.factories.insert(name.into(), factory);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&TransformerFactory> {
        self.factories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Ordered list of registries consulted when resolving a filter name.
#[derive(Debug, Clone)]
pub struct FilterResolver {
    registries: Vec<TransformerRegistry>,
}

impl FilterResolver {
    /// Create a resolver with no registries.
    pub fn new() -> Self {
        Self {
            registries: Vec::new(),
        }
    }

    /// Append a registry with lower priority than those already added
    /// (builder pattern).
    pub fn with_registry(mut self, registry: TransformerRegistry) -> Self {
        self.registries.push(registry);
        self
    }

    pub fn registries(&self) -> &[TransformerRegistry] {
        &self.registries
    }

    /// Mutable access to the registry for `namespace`, if present.
    pub fn registry_mut(&mut self, namespace: &str) -> Option<&mut TransformerRegistry> {
        self.registries
            .iter_mut()
            .find(|registry| registry.namespace() == namespace)
    }

    /// Mutable access to the `custom` registry, created at the lowest
    /// priority if it doesn't exist yet.
    pub fn custom_mut(&mut self) -> &mut TransformerRegistry {
        let index = match self
            .registries
            .iter()
            .position(|registry| registry.namespace() == "custom")
        {
            Some(index) => index,
            None => {
                self.registries.push(TransformerRegistry::new("custom"));
                self.registries.len() - 1
            }
        };
        &mut self.registries[index]
    }

    /// Find the first registry, in priority order, that defines `name`.
    pub fn lookup(&self, name: &str) -> Option<(QualifiedName, &TransformerFactory)> {
        self.registries.iter().find_map(|registry| {
            registry
                .lookup(name)
                .map(|factory| (QualifiedName::new(registry.namespace(), name), factory))
        })
    }

    pub fn resolve_type_name(&self, name: &str) -> Option<QualifiedName> {
        self.lookup(name).map(|(qualified, _)| qualified)
    }
}

impl Default for FilterResolver {
    /// Builtin transformers first, then the custom ones.
    fn default() -> Self {
        Self::new()
            .with_registry(builtin_registry())
            .with_registry(custom_registry())
    }
}
