/*!
 * VFS Metadata
 * Synthetic file metadata for embedded assets
 */

use super::file_type::FileType;
use crate::core::serde::{is_zero_u64, system_time_micros};
use crate::vfs::mime::mime_for_path;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// File metadata as reported by `stat` on an open handle
///
/// Timestamps are serialized as microseconds since UNIX epoch.
/// Size is skipped when zero to reduce payload size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Metadata {
    /// Base name of the backing asset (e.g. `index.html`)
    pub name: String,
    pub file_type: FileType,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub size: u64,
    #[serde(with = "system_time_micros")]
    pub modified: SystemTime,
}

impl Metadata {
    /// Check if this handle was produced by the directory index fallback
    ///
    /// # Performance
    /// Hot path - checked by HTTP handlers on every response
    #[inline(always)]
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.file_type, FileType::Directory)
    }

    /// Check if this is a directly stored asset
    #[inline(always)]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.file_type, FileType::File)
    }

    /// MIME type for the `Content-Type` header, derived from the asset name
    #[inline]
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        mime_for_path(&self.name)
    }
}
