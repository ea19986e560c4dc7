/*!
 * File Handle Implementation
 * Per-open cursor over an embedded asset's shared bytes
 */

use std::fmt;
use std::io::{Cursor, Read, Seek, SeekFrom};

use bytes::Bytes;

use super::super::traits::OpenFile;
use super::super::types::*;
use crate::assets::Asset;

/// Handle over one embedded asset
///
/// The byte buffer is shared with the table and every other handle; only the
/// cursor is owned. Seeking past the end is allowed and reads then return 0.
pub struct EmbeddedFile {
    cursor: Cursor<Bytes>,
    metadata: Metadata,
    closed: bool,
}

impl EmbeddedFile {
    pub(super) fn new(asset: &Asset, file_type: FileType) -> Self {
        Self {
            cursor: Cursor::new(asset.data().clone()),
            metadata: asset.metadata(file_type),
            closed: false,
        }
    }

    /// Current read position
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    fn ensure_open(&self) -> VfsResult<()> {
        if self.closed {
            return Err(VfsError::Closed(self.metadata.name.clone()));
        }
        Ok(())
    }
}

/// Payload bytes are left out; a handle may be over the whole bundle
impl fmt::Debug for EmbeddedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFile")
            .field("metadata", &self.metadata)
            .field("position", &self.cursor.position())
            .field("closed", &self.closed)
            .finish()
    }
}

impl Read for EmbeddedFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.ensure_open()?;
        self.cursor.read(buf)
    }
}

impl Seek for EmbeddedFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.ensure_open()?;
        self.cursor.seek(pos)
    }
}

impl OpenFile for EmbeddedFile {
    fn metadata(&self) -> VfsResult<Metadata> {
        self.ensure_open()?;
        Ok(self.metadata.clone())
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
