//! # File Filter Module
//!
//! This module contains the two filters every discovered file passes
//! through: the target-suffix filter and the exclusion-prefix filter. Each
//! file ends up in exactly one of three classes (wrong suffix, excluded, or
//! in scope).

use std::path::{MAIN_SEPARATOR, Path};

use crate::config::NoticeConfig;
use crate::verbose_log;

/// Outcome of classifying a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
  /// The file receives the notice.
  InScope,
  /// The file name does not end with the target suffix.
  WrongSuffix,
  /// The constructed path starts with an exclusion prefix.
  Excluded {
    /// The first prefix in list order that matched.
    prefix: String,
  },
}

impl Classification {
  pub const fn is_in_scope(&self) -> bool {
    matches!(self, Self::InScope)
  }
}

/// Trait for components that classify discovered files.
pub trait FileFilter: Send + Sync {
  /// Classifies `path`, the walk root joined with the discovered relative
  /// path.
  fn classify(&self, path: &Path) -> Classification;
}

/// Renders a path with `/` separators for prefix comparison.
///
/// The path is otherwise taken exactly as discovered: no canonicalisation and
/// no conversion to an absolute path.
pub fn constructed_path(path: &Path) -> String {
  let rendered = path.to_string_lossy();
  if MAIN_SEPARATOR == '/' {
    rendered.into_owned()
  } else {
    rendered.replace(MAIN_SEPARATOR, "/")
  }
}

/// Filter that keeps files whose name ends with the target suffix.
pub struct SuffixFilter {
  suffix: String,
}

impl SuffixFilter {
  pub fn new(suffix: impl Into<String>) -> Self {
    Self { suffix: suffix.into() }
  }
}

impl FileFilter for SuffixFilter {
  fn classify(&self, path: &Path) -> Classification {
    let matches = path
      .file_name()
      .is_some_and(|name| name.to_string_lossy().ends_with(self.suffix.as_str()));

    if matches {
      Classification::InScope
    } else {
      Classification::WrongSuffix
    }
  }
}

/// Filter that excludes files whose constructed path starts with a prefix.
///
/// Matching is exact and textual: `Assets/Lib/` does not exclude
/// `Assets/Lib2/x.cs`, and no glob syntax is interpreted.
pub struct PrefixExclusionFilter {
  prefixes: Vec<String>,
}

impl PrefixExclusionFilter {
  pub const fn new(prefixes: Vec<String>) -> Self {
    Self { prefixes }
  }
}

impl FileFilter for PrefixExclusionFilter {
  fn classify(&self, path: &Path) -> Classification {
    if self.prefixes.is_empty() {
      return Classification::InScope;
    }

    let constructed = constructed_path(path);
    match self.prefixes.iter().find(|prefix| constructed.starts_with(prefix.as_str())) {
      Some(prefix) => {
        verbose_log!("Skipping: {} (matches exclusion prefix {})", constructed, prefix);
        Classification::Excluded { prefix: prefix.clone() }
      }
      None => Classification::InScope,
    }
  }
}

/// Filter that runs several filters in order.
///
/// The first result that is not [`Classification::InScope`] wins.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  pub fn new() -> Self {
    Self { filters: Vec::new() }
  }

  /// Appends a filter; filters run in insertion order.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl Default for CompositeFilter {
  fn default() -> Self {
    Self::new()
  }
}

impl FileFilter for CompositeFilter {
  fn classify(&self, path: &Path) -> Classification {
    for filter in &self.filters {
      let result = filter.classify(path);
      if !result.is_in_scope() {
        return result;
      }
    }
    Classification::InScope
  }
}

/// Creates the suffix-then-exclusion filter for a run.
pub fn create_default_filter(config: &NoticeConfig) -> CompositeFilter {
  let mut composite = CompositeFilter::new();
  composite.add_filter(Box::new(SuffixFilter::new(config.target_suffix.clone())));
  composite.add_filter(Box::new(PrefixExclusionFilter::new(config.exclusion_prefixes.clone())));
  composite
}
