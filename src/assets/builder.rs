/*!
 * Asset Table Builder
 * Validated construction of custom asset tables
 */

use ahash::RandomState;
use bytes::Bytes;
use std::collections::HashMap;
use std::time::SystemTime;

use super::{build_time, Asset, AssetTable};
use crate::vfs::embedded::EmbeddedFS;
use crate::vfs::paths::is_normalized;
use crate::vfs::traits::FileSystemBuilder;
use crate::vfs::types::{VfsError, VfsResult};

/// Builder for an [`AssetTable`]
///
/// Entries are checked when the table is produced: every key must start
/// with `/`, contain no `//`, and appear only once.
#[derive(Debug, Default)]
pub struct AssetTableBuilder {
    entries: Vec<(String, Bytes)>,
    modified: Option<SystemTime>,
}

impl AssetTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset under its request path
    pub fn asset(mut self, path: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.entries.push((path.into(), data.into()));
        self
    }

    /// Modification time for every asset (defaults to the build time)
    pub fn modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Validate the entries and freeze them into a table
    pub fn into_table(self) -> VfsResult<AssetTable> {
        let modified = self.modified.unwrap_or_else(build_time);
        let mut assets = HashMap::with_capacity_and_hasher(self.entries.len(), RandomState::new());

        for (path, data) in self.entries {
            if !is_normalized(&path) {
                return Err(VfsError::InvalidPath(format!(
                    "asset key must be absolute with single slashes: {path:?}"
                )));
            }
            if assets.contains_key(&path) {
                return Err(VfsError::AlreadyExists(path));
            }
            let asset = Asset::new(path.clone(), data, modified);
            assets.insert(path, asset);
        }

        Ok(AssetTable::from_map(assets))
    }
}

impl FileSystemBuilder for AssetTableBuilder {
    type Output = EmbeddedFS;

    fn build(self) -> VfsResult<EmbeddedFS> {
        Ok(EmbeddedFS::new(self.into_table()?))
    }
}
