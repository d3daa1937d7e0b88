//! JSON manifest describing assets and their filters.
//!
//! ```json
//! {
//!   "assets": [
//!     { "path": "css/site.css", "filters": [{ "name": "CssMin", "environments": ["production"] }] },
//!     { "path": "js/app.js", "content": "run();", "filters": [{ "name": "JsMin" }] }
//!   ]
//! }
//! ```

use crate::asset::Asset;
use crate::error::ManifestError;
use filters::{AssetGroup, FilterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub path: String,

    /// Inferred from the extension when omitted
    #[serde(default)]
    pub group: Option<AssetGroup>,

    /// Inline source; read from `path` when omitted
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

impl Manifest {
    pub fn parse(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let json = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&json)
    }

    /// Turn every entry into an `Asset` with its filters registered.
    ///
    /// Entries without inline content are read relative to `base_dir`.
    pub fn into_assets(self, base_dir: &Path) -> Result<Vec<Arc<Asset>>, ManifestError> {
        self.assets
            .into_iter()
            .map(|entry| -> Result<Arc<Asset>, ManifestError> {
                let group = entry
                    .group
                    .or_else(|| Asset::group_for_path(&entry.path))
                    .ok_or_else(|| ManifestError::UnknownGroup {
                        path: entry.path.clone(),
                    })?;

                let content = match entry.content {
                    Some(content) => content,
                    None => {
                        let file = base_dir.join(&entry.path);
                        fs::read_to_string(&file).map_err(|source| ManifestError::Io {
                            path: file.display().to_string(),
                            source,
                        })?
                    }
                };

                let asset = Asset::new(entry.path, group, content);
                for filter in entry.filters {
                    asset.add_filter(filter.into_descriptor());
                }
                Ok(asset)
            })
            .collect()
    }
}
