/*!
 * VFS Types
 * Shared types for embedded filesystem operations
 */

mod errors;
mod file_type;
mod metadata;

pub use errors::{VfsError, VfsResult};
pub use file_type::FileType;
pub use metadata::Metadata;
