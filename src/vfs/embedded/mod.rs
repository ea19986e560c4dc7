/*!
 * Embedded Filesystem Backend
 * Read-only filesystem over an immutable asset table with SPA index fallback
 */

mod file_handle;
mod fs_ops;

use tracing::{debug, trace};

use super::paths::index_candidate;
use super::types::*;
use crate::assets::{Asset, AssetTable};

pub use file_handle::EmbeddedFile;

/// Embedded filesystem implementation
///
/// Cheap to clone; every clone reads the same table.
#[derive(Debug, Clone)]
pub struct EmbeddedFS {
    table: AssetTable,
}

impl EmbeddedFS {
    /// Serve the given table
    pub fn new(table: AssetTable) -> Self {
        Self { table }
    }

    /// Serve the web UI bundle compiled into this crate
    pub fn embedded() -> Self {
        Self::new(AssetTable::embedded())
    }

    /// Backing table, for raw-byte lookups outside the HTTP path
    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    /// Resolve a request path to an asset
    ///
    /// A stored path wins. Otherwise `path + "/index.html"` is tried once and
    /// reported as a directory. Nothing else is attempted.
    pub(super) fn resolve(&self, path: &str) -> VfsResult<(&Asset, FileType)> {
        if let Some(asset) = self.table.get(path) {
            trace!(path = %path, "Asset hit");
            return Ok((asset, FileType::File));
        }

        let candidate = index_candidate(path);
        if let Some(asset) = self.table.get(&candidate) {
            debug!(path = %path, index = %candidate, "Serving directory index");
            return Ok((asset, FileType::Directory));
        }

        trace!(path = %path, "Asset miss");
        Err(VfsError::NotFound(if path.is_empty() {
            "<empty path>".to_string()
        } else {
            path.to_string()
        }))
    }
}

impl Default for EmbeddedFS {
    fn default() -> Self {
        Self::embedded()
    }
}
