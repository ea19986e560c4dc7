/*!
 * VFS Traits
 * Filesystem contracts consumed by static-file HTTP handlers
 */

use std::io::{Read, Seek};

use bytes::Bytes;

use super::types::*;

/// Read-only virtual filesystem trait
///
/// Paths are request paths (`/static/app.js`), not host paths. All lookups
/// are pure: no implementation may mutate shared state while answering.
pub trait FileSystem: Send + Sync {
    /// Open a file for reading
    fn open(&self, path: &str) -> VfsResult<Box<dyn OpenFile>>;

    /// Read entire file contents, resolving the path exactly as `open` does
    fn read(&self, path: &str) -> VfsResult<Bytes>;

    /// Check if `open` would succeed for this path
    fn exists(&self, path: &str) -> bool;

    /// Get file metadata without keeping a handle around
    fn metadata(&self, path: &str) -> VfsResult<Metadata> {
        self.open(path)?.metadata()
    }

    /// Get filesystem name/type
    fn name(&self) -> &str;

    /// Check if filesystem is read-only
    fn readonly(&self) -> bool {
        true
    }
}

/// Open file handle trait
///
/// Represents an open file with read/seek capabilities and its own cursor.
/// Dropping the handle is equivalent to closing it.
pub trait OpenFile: Read + Seek + Send + Sync {
    /// Get file metadata captured when the handle was opened
    fn metadata(&self) -> VfsResult<Metadata>;

    /// Mark the handle closed; calling it again is a no-op
    fn close(&mut self);

    /// Whether `close` has been called
    fn is_closed(&self) -> bool;
}

/// Filesystem builder trait for configuration
pub trait FileSystemBuilder {
    type Output: FileSystem;

    /// Build the filesystem instance
    fn build(self) -> VfsResult<Self::Output>;
}
