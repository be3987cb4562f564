//! # File I/O Module
//!
//! This module provides the whole-file read and the destructive overwrite the
//! processor is built on. Both are synchronous.

use std::path::Path;

use crate::error::{IoOperation, NoticeError, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the complete content of a file as UTF-8 text.
  ///
  /// # Errors
  ///
  /// - [`NoticeError::Filesystem`] if the file cannot be read
  /// - [`NoticeError::Decoding`] if the bytes are not valid UTF-8
  pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| NoticeError::filesystem(path, IoOperation::Read, e))?;
    String::from_utf8(bytes).map_err(|source| NoticeError::Decoding {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Replaces the entire content of a file.
  ///
  /// This is destructive: the file is truncated and `content` becomes its
  /// only content. No backup is kept and the write is not atomic.
  ///
  /// # Errors
  ///
  /// [`NoticeError::Filesystem`] if the file cannot be opened or written.
  pub fn overwrite(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| NoticeError::filesystem(path, IoOperation::Write, e))
  }
}
