//! # File Collector Module
//!
//! This module walks the root directory and yields every file beneath it.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{IoOperation, NoticeError, Result};

/// File collector for directory traversal.
///
/// Paths are yielded as `root` joined with the discovered relative path, so
/// a root of `Assets` yields `Assets/Fungus/...`.
pub struct FileCollector {
  /// Directory the walk starts from
  root: PathBuf,
}

impl FileCollector {
  /// Creates a collector after checking that `root` is an existing
  /// directory.
  ///
  /// # Errors
  ///
  /// - [`NoticeError::RootNotFound`] if `root` does not exist
  /// - [`NoticeError::NotADirectory`] if `root` is not a directory
  /// - [`NoticeError::Filesystem`] if its metadata cannot be read
  pub fn new(root: PathBuf) -> Result<Self> {
    match std::fs::metadata(&root) {
      Ok(meta) if meta.is_dir() => Ok(Self { root }),
      Ok(_) => Err(NoticeError::NotADirectory { path: root }),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Err(NoticeError::RootNotFound { path: root }),
      Err(e) => Err(NoticeError::filesystem(&root, IoOperation::Walk, e)),
    }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Lazily walks the tree depth-first, entries sorted by file name.
  ///
  /// Symlinks to files are yielded like files; symlinked directories are not
  /// descended. The first unreadable directory yields an error.
  pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
    debug!("Scanning directory: {}", self.root.display());

    WalkDir::new(&self.root)
      .follow_links(false)
      .sort_by_file_name()
      .into_iter()
      .filter_map(move |entry| match entry {
        Ok(entry) if is_file_like(&entry) => {
          trace!("Discovered: {}", entry.path().display());
          Some(Ok(entry.into_path()))
        }
        Ok(_) => None,
        Err(e) => Some(Err(self.walk_error(e))),
      })
  }

  fn walk_error(&self, err: walkdir::Error) -> NoticeError {
    let path = err.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
    let source = err
      .into_io_error()
      .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    NoticeError::filesystem(&path, IoOperation::Walk, source)
  }
}

fn is_file_like(entry: &DirEntry) -> bool {
  let file_type = entry.file_type();
  file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
