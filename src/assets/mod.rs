/*!
 * Asset Table
 * Immutable path -> bytes mapping for the embedded web UI
 */

mod builder;
mod embedded;

use ahash::RandomState;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

use crate::vfs::paths::{base_name, normalize};
use crate::vfs::types::{FileType, Metadata, VfsError, VfsResult};

pub use builder::AssetTableBuilder;
pub use embedded::{build_time, EmbeddedAsset, EMBEDDED_ASSETS};

/// One embedded, named, immutable byte blob
#[derive(Debug, Clone)]
pub struct Asset {
    path: String,
    data: Bytes,
    modified: SystemTime,
}

impl Asset {
    pub(crate) fn new(path: String, data: Bytes, modified: SystemTime) -> Self {
        Self {
            path,
            data,
            modified,
        }
    }

    /// Normalized lookup key (always starts with `/`)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name, for display only
    pub fn name(&self) -> &str {
        base_name(&self.path)
    }

    /// Shared payload; cloning is a reference count bump
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Metadata for a handle opened against this asset
    pub fn metadata(&self, file_type: FileType) -> Metadata {
        Metadata {
            name: self.name().to_string(),
            file_type,
            size: self.size(),
            modified: self.modified,
        }
    }
}

/// Manifest row: the asset path plus its stat fields
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
    #[serde(flatten)]
    pub metadata: Metadata,
}

/// The complete, fixed mapping from normalized path to asset
///
/// Built once and never mutated. Clones share the same map.
#[derive(Debug, Clone)]
pub struct AssetTable {
    assets: Arc<HashMap<String, Asset, RandomState>>,
}

impl AssetTable {
    pub(crate) fn from_map(assets: HashMap<String, Asset, RandomState>) -> Self {
        let total_bytes: u64 = assets.values().map(Asset::size).sum();
        debug!(
            assets = assets.len(),
            total_bytes = total_bytes,
            "Asset table built"
        );
        Self {
            assets: Arc::new(assets),
        }
    }

    /// Start building a custom table
    pub fn builder() -> AssetTableBuilder {
        AssetTableBuilder::new()
    }

    /// The web UI bundle compiled into this crate
    pub fn embedded() -> Self {
        let modified = build_time();
        let mut assets =
            HashMap::with_capacity_and_hasher(EMBEDDED_ASSETS.len(), RandomState::new());
        for entry in EMBEDDED_ASSETS {
            let data = Bytes::from_static(entry.data);
            assets.insert(
                entry.path.to_string(),
                Asset::new(entry.path.to_string(), data, modified),
            );
        }
        Self::from_map(assets)
    }

    /// Exact-match lookup after slash normalization
    pub fn get(&self, path: &str) -> Option<&Asset> {
        self.assets.get(normalize(path).as_ref())
    }

    /// Raw bytes of a stored asset
    ///
    /// No index fallback is applied; `/` is not an alias for `/index.html` here.
    pub fn lookup(&self, path: &str) -> VfsResult<Bytes> {
        self.get(path)
            .map(|asset| asset.data().clone())
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }

    /// Raw bytes of an asset the caller knows is compiled in
    ///
    /// # Panics
    /// Panics if the path is not in the table. Only use it for paths fixed
    /// at build time, such as the application's own bundle names.
    pub fn must_lookup(&self, path: &str) -> Bytes {
        match self.lookup(path) {
            Ok(data) => data,
            Err(e) => panic!("embedded asset missing from table: {e}"),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.assets.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Stat fields of every asset, sorted by path
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.paths()
            .into_iter()
            .filter_map(|path| self.assets.get(path))
            .map(|asset| ManifestEntry {
                path: asset.path().to_string(),
                metadata: asset.metadata(FileType::File),
            })
            .collect()
    }
}
