/*!
 * Filesystem Operations Implementation
 * FileSystem trait methods for the embedded backend
 */

use bytes::Bytes;

use super::super::traits::{FileSystem, OpenFile};
use super::super::types::*;
use super::file_handle::EmbeddedFile;
use super::EmbeddedFS;

impl FileSystem for EmbeddedFS {
    fn open(&self, path: &str) -> VfsResult<Box<dyn OpenFile>> {
        let (asset, file_type) = self.resolve(path)?;
        Ok(Box::new(EmbeddedFile::new(asset, file_type)))
    }

    fn read(&self, path: &str) -> VfsResult<Bytes> {
        let (asset, _) = self.resolve(path)?;
        Ok(asset.data().clone())
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }

    fn metadata(&self, path: &str) -> VfsResult<Metadata> {
        let (asset, file_type) = self.resolve(path)?;
        Ok(asset.metadata(file_type))
    }

    fn name(&self) -> &str {
        "embedded"
    }

    fn readonly(&self) -> bool {
        true
    }
}
