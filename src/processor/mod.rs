//! # Processor Module
//!
//! This module contains the core of addnotice: walk the root directory,
//! classify each file, and prepend the notice to every in-scope file.
//!
//! The module is organized into two submodules:
//! - [`file_io`] - Whole-file reads and the destructive overwrite
//! - [`file_collector`] - Directory traversal
//!
//! Files are handled one at a time. The first error aborts the run and files
//! rewritten before it stay rewritten.

mod file_collector;
mod file_io;

use std::path::Path;
use std::time::Instant;

pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, info};

use crate::config::NoticeConfig;
use crate::error::Result;
use crate::file_filter::{Classification, CompositeFilter, FileFilter, create_default_filter};
use crate::output::print_new_contents;
use crate::report::{FileAction, FileReport, RunSummary};
use crate::verbose_log;

/// Applies the notice to every in-scope file under `config.root`.
///
/// Convenience wrapper around [`Processor`] without the audit echo.
///
/// # Errors
///
/// See [`Processor::process`].
pub fn apply_notices(config: &NoticeConfig) -> Result<RunSummary> {
  Processor::new(config.clone())?.process()
}

/// Processor for prepending the notice to files.
///
/// The `Processor` is responsible for:
/// - Walking the root directory recursively
/// - Classifying files by suffix and exclusion prefix
/// - Rewriting in-scope files as `notice + original`
/// - Optionally echoing each new file content to stdout
/// - Collecting report data about candidate files
pub struct Processor {
  /// Run configuration
  config: NoticeConfig,

  /// Suffix and exclusion filters, in that order
  file_filter: CompositeFilter,

  /// Whether each rewritten file's new content is printed to stdout
  echo: bool,
}

impl Processor {
  /// Creates a new processor for `config`.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid.
  pub fn new(config: NoticeConfig) -> Result<Self> {
    config.validate()?;
    let file_filter = create_default_filter(&config);

    Ok(Self {
      config,
      file_filter,
      echo: false,
    })
  }

  /// Enables or disables the audit echo of rewritten contents.
  #[must_use]
  pub fn with_echo(mut self, echo: bool) -> Self {
    self.echo = echo;
    self
  }

  pub const fn config(&self) -> &NoticeConfig {
    &self.config
  }

  /// Walks the root and rewrites every in-scope file.
  ///
  /// This method:
  /// 1. Checks that the root is an existing directory
  /// 2. Visits every file beneath it
  /// 3. Skips files without the target suffix, then files under an exclusion
  ///    prefix
  /// 4. Overwrites each remaining file with `notice + original`
  ///
  /// Running it twice prepends the notice twice unless
  /// [`NoticeConfig::skip_noticed`] is set.
  ///
  /// # Errors
  ///
  /// Returns the first error encountered: a missing or non-directory root,
  /// an unreadable directory, or a file that cannot be read, decoded as
  /// UTF-8, or written. Nothing is rolled back.
  pub fn process(&self) -> Result<RunSummary> {
    let start_time = Instant::now();
    let collector = FileCollector::new(self.config.root.clone())?;
    let mut summary = RunSummary::new(collector.root());

    for path in collector.walk() {
      let path = path?;

      match self.file_filter.classify(&path) {
        Classification::WrongSuffix => {
          summary.record_wrong_suffix();
        }
        Classification::Excluded { prefix } => {
          summary.record(FileReport {
            path,
            action: FileAction::Excluded,
            excluded_by: Some(prefix),
          });
        }
        Classification::InScope => {
          let action = self.process_file(&path)?;
          summary.record(FileReport {
            path,
            action,
            excluded_by: None,
          });
        }
      }
    }

    summary.set_elapsed(start_time.elapsed());
    info!(
      "Noticed {} of {} files in {}ms",
      summary.noticed, summary.files_scanned, summary.elapsed_ms
    );
    Ok(summary)
  }

  /// Rewrites a single in-scope file.
  fn process_file(&self, path: &Path) -> Result<FileAction> {
    verbose_log!("Processing file: {}", path.display());

    let notice = self.config.notice.as_str();
    let original = FileIO::read_text(path)?;

    if self.config.skip_noticed && !notice.is_empty() && original.starts_with(notice) {
      debug!("Already noticed: {}", path.display());
      return Ok(FileAction::AlreadyNoticed);
    }

    let mut new_contents = String::with_capacity(notice.len() + original.len());
    new_contents.push_str(notice);
    new_contents.push_str(&original);
    FileIO::overwrite(path, &new_contents)?;

    if self.echo {
      print_new_contents(&new_contents)?;
    }

    Ok(FileAction::Noticed)
  }
}
