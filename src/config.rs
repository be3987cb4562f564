//! # Configuration Module
//!
//! This module holds the explicit run configuration for addnotice: the walk
//! root, the target suffix, the ordered exclusion prefixes and the notice
//! text. [`NoticeConfig::default`] gives the reference project layout, so a
//! bare invocation from the project root behaves like the original tool.
//!
//! There is no configuration file format. Callers override fields through
//! CLI flags, `ADDNOTICE_*` environment variables or a notice file.

use std::path::{Path, PathBuf};

use crate::error::{NoticeError, Result};
use crate::processor::FileIO;
use crate::verbose_log;

/// Default walk root, relative to the current directory.
pub const DEFAULT_ROOT: &str = "Assets";

/// Default file-name suffix of the files that receive the notice.
pub const DEFAULT_TARGET_SUFFIX: &str = ".cs";

/// Default notice block.
///
/// Two comment lines followed by a blank line, so the original first line of
/// the file starts right after the block.
pub const DEFAULT_NOTICE: &str = "// This code is part of the Fungus library (https://github.com/snozbot/fungus)\n\
// It is released for free under the MIT open source license (https://github.com/snozbot/fungus/blob/master/LICENSE)\n\
\n";

/// Third-party directories of the reference layout that keep their own
/// headers.
pub const DEFAULT_EXCLUSION_PREFIXES: &[&str] = &[
  "Assets/Fungus/Thirdparty/CSVParser/",
  "Assets/Fungus/Thirdparty/ComboBox/",
  "Assets/Fungus/Thirdparty/FungusLua/",
  "Assets/Fungus/Thirdparty/Reorderable List Field/",
  "Assets/Fungus/Thirdparty/Usfxr/",
];

/// Environment variable for the walk root.
pub const ROOT_ENV_VAR: &str = "ADDNOTICE_ROOT";

/// Environment variable for the target suffix.
pub const SUFFIX_ENV_VAR: &str = "ADDNOTICE_SUFFIX";

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeConfig {
  /// Directory the walk starts from. Constructed paths are `root` joined
  /// with the discovered relative path, exactly as given here.
  pub root: PathBuf,

  /// Files whose name does not end with this are left alone.
  pub target_suffix: String,

  /// Paths starting with any of these are left alone. Plain textual
  /// prefixes, compared against `/`-separated constructed paths.
  pub exclusion_prefixes: Vec<String>,

  /// Text inserted at the very start of every in-scope file.
  pub notice: String,

  /// Leave files that already start with `notice` untouched.
  pub skip_noticed: bool,
}

impl Default for NoticeConfig {
  fn default() -> Self {
    Self {
      root: PathBuf::from(DEFAULT_ROOT),
      target_suffix: DEFAULT_TARGET_SUFFIX.to_string(),
      exclusion_prefixes: DEFAULT_EXCLUSION_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
      notice: DEFAULT_NOTICE.to_string(),
      skip_noticed: false,
    }
  }
}

impl NoticeConfig {
  /// Reference configuration rooted at `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      ..Self::default()
    }
  }

  /// Replace the exclusion list.
  pub fn with_exclusions<I, S>(mut self, prefixes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.exclusion_prefixes = prefixes.into_iter().map(Into::into).collect();
    self
  }

  /// Replace the target suffix.
  pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
    self.target_suffix = suffix.into();
    self
  }

  /// Replace the notice text.
  pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
    self.notice = notice.into();
    self
  }

  /// Checks the invariants the walk relies on.
  ///
  /// # Errors
  ///
  /// Returns [`NoticeError::InvalidConfig`] if the target suffix is empty.
  pub fn validate(&self) -> Result<()> {
    if self.target_suffix.is_empty() {
      return Err(NoticeError::InvalidConfig("target suffix must not be empty".to_string()));
    }
    Ok(())
  }
}

/// Load notice text from a file, verbatim.
///
/// # Errors
///
/// Fails with a filesystem error if the file cannot be read, or a decoding
/// error if it is not UTF-8.
pub fn load_notice_file(path: &Path) -> Result<String> {
  verbose_log!("Loading notice from: {}", path.display());
  FileIO::read_text(path)
}
