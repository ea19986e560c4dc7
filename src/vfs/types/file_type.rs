/*!
 * VFS File Type Enum
 * How a handle was resolved: a stored asset or a directory index
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// File type of an open handle
///
/// Every stored asset is a regular file. A handle reached through the
/// `index.html` fallback reports `Directory` while reading the index bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    #[default]
    File,
    Directory,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileType::File => write!(f, "file"),
            FileType::Directory => write!(f, "directory"),
        }
    }
}
