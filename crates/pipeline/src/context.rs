//! Build context a filter's applicability is checked against.

use filters::{AssetGroup, FilterDescriptor};

/// The environment being built, plus an optional group to build.
///
/// Assets outside `group` are left untouched when it is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub environment: String,
    pub group: Option<AssetGroup>,
}

impl BuildContext {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            group: None,
        }
    }

    /// Restrict the build to one group (builder pattern).
    pub fn with_group(mut self, group: AssetGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Whether assets of `group` are part of this build
    pub fn includes(&self, group: AssetGroup) -> bool {
        self.group.is_none_or(|g| g == group)
    }

    /// Whether `filter` should run on an asset of `group` in this build.
    pub fn selects(&self, filter: &FilterDescriptor, group: AssetGroup) -> bool {
        self.includes(group) && filter.applies_to(&self.environment, group)
    }
}
