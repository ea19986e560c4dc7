/*!
 * Web UI Assets Library
 * Read-only in-memory filesystem over the bundled single-page application
 *
 * An HTTP server mounts [`EmbeddedFS`] and answers GET requests through the
 * [`FileSystem`] / [`OpenFile`] contracts; code that only needs raw bytes
 * (template injection, for instance) goes through [`AssetTable::lookup`].
 */

pub mod assets;
pub mod core;
pub mod vfs;

// Re-exports
pub use assets::{Asset, AssetTable, AssetTableBuilder, ManifestEntry};
pub use vfs::{
    mime_for_path, EmbeddedFS, EmbeddedFile, FileSystem, FileSystemBuilder, FileType, Metadata,
    OpenFile, VfsError, VfsResult,
};
