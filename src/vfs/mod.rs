/*!
 * Virtual File System Module
 * Filesystem-style access to the embedded web UI assets
 */

pub mod embedded;
pub mod mime;
pub mod paths;
pub mod traits;
pub mod types;

// Re-exports
pub use embedded::{EmbeddedFS, EmbeddedFile};
pub use mime::mime_for_path;
pub use traits::{FileSystem, FileSystemBuilder, OpenFile};
pub use types::{FileType, Metadata, VfsError, VfsResult};
