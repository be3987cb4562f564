//! # Error Module
//!
//! Error kinds produced while applying notices. None of them are recovered
//! locally: the first one aborts the run.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
  /// Inspecting the root or enumerating a directory.
  Walk,
  /// Reading a file's contents.
  Read,
  /// Overwriting a file's contents.
  Write,
}

impl fmt::Display for IoOperation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IoOperation::Walk => write!(f, "walk"),
      IoOperation::Read => write!(f, "read"),
      IoOperation::Write => write!(f, "write"),
    }
  }
}

/// Errors returned by the notice operations.
#[derive(Debug, Error)]
pub enum NoticeError {
  /// The walk root does not exist.
  #[error("Root directory not found: {}", path.display())]
  RootNotFound { path: PathBuf },

  /// The walk root exists but is not a directory.
  #[error("Root is not a directory: {}", path.display())]
  NotADirectory { path: PathBuf },

  /// I/O failure on a specific path.
  #[error("Failed to {operation} {}: {source}", path.display())]
  Filesystem {
    path: PathBuf,
    operation: IoOperation,
    #[source]
    source: std::io::Error,
  },

  /// File content is not valid UTF-8 text.
  #[error("Failed to decode {} as UTF-8 text: {source}", path.display())]
  Decoding {
    path: PathBuf,
    #[source]
    source: std::string::FromUtf8Error,
  },

  /// The configuration cannot be used for a run.
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

impl NoticeError {
  /// Builds a [`NoticeError::Filesystem`] for `path`.
  pub fn filesystem(path: &Path, operation: IoOperation, source: std::io::Error) -> Self {
    Self::Filesystem {
      path: path.to_path_buf(),
      operation,
      source,
    }
  }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, NoticeError>;
