/*!
 * VFS Error Types
 * Structured, type-safe error handling for embedded filesystem operations
 */

use serde::{Deserialize, Deserializer, Serialize};
use std::io;
use thiserror::Error;

/// VFS operation result
///
/// Lookups can miss and must be handled (typically as a 404)
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS errors with structured, type-safe error handling
///
/// All error variants carry the offending path, which must be non-empty.
/// Serialization uses tagged enum pattern for type safety.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum VfsError {
    #[error("Not found: {0}")]
    NotFound(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Invalid path: {0}")]
    InvalidPath(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Already exists: {0}")]
    AlreadyExists(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("File closed: {0}")]
    Closed(#[serde(deserialize_with = "deserialize_nonempty_string")] String),
}

impl VfsError {
    /// Whether this error means the asset simply is not there
    #[inline]
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound(_))
    }
}

/// Handle I/O goes through `std::io` traits, so VFS errors cross that boundary
impl From<VfsError> for io::Error {
    fn from(err: VfsError) -> Self {
        let kind = match &err {
            VfsError::NotFound(_) => io::ErrorKind::NotFound,
            VfsError::InvalidPath(_) => io::ErrorKind::InvalidInput,
            VfsError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            VfsError::Closed(_) => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

/// Deserialize and validate non-empty string for error messages
pub(super) fn deserialize_nonempty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("error message must not be empty"));
    }
    Ok(s)
}
