//! # Output Module
//!
//! This module centralizes all user-facing output for the addnotice tool.
//!
//! Standard output carries only the audit echo: the full new content of
//! every rewritten file. Progress and the run summary go to standard error,
//! so stdout stays a clean record of what was written.

use std::io::Write;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::config::NoticeConfig;
use crate::error::{IoOperation, NoticeError, Result};
use crate::logging::{is_quiet, is_verbose};
use crate::report::RunSummary;

/// Symbols used in output
pub mod symbols {
  /// Notice added
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Excluded or already noticed
  pub const IGNORED: &str = "-";
}

/// Path reported when the audit echo cannot be written.
pub const STDOUT_PATH: &str = "<stdout>";

/// Print a rewritten file's new content to stdout.
///
/// # Errors
///
/// [`NoticeError::Filesystem`] on [`STDOUT_PATH`] if stdout is closed or
/// full.
pub fn print_new_contents(contents: &str) -> Result<()> {
  let mut out = std::io::stdout().lock();
  writeln!(out, "{contents}")
    .and_then(|()| out.flush())
    .map_err(|e| NoticeError::filesystem(Path::new(STDOUT_PATH), IoOperation::Write, e))
}

/// Print the "Adding notice to ..." banner.
pub fn print_start_message(config: &NoticeConfig) {
  if is_quiet() {
    return;
  }

  eprintln!(
    "Adding notice to *{} files under {}...",
    config.target_suffix,
    config.root.display()
  );
}

/// Print the end-of-run summary.
///
/// In verbose mode every rewritten file is listed first.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  if is_verbose() {
    for path in summary.noticed_files() {
      eprintln!(
        "  {} {}",
        symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
        path.display()
      );
    }
  }

  let files_word = if summary.noticed == 1 { "file" } else { "files" };
  eprintln!(
    "{} Added notice to {} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
    summary.noticed.if_supports_color(Stream::Stderr, |n| n.bold()),
    files_word
  );

  let skipped = summary.excluded + summary.already_noticed;
  if skipped > 0 {
    eprintln!(
      "{} Skipped {} ({} excluded, {} already noticed)",
      symbols::IGNORED.if_supports_color(Stream::Stderr, |s| s.yellow()),
      skipped,
      summary.excluded,
      summary.already_noticed
    );
  }

  eprintln!(
    "  {} files scanned, {} without the target suffix, {}ms",
    summary.files_scanned, summary.wrong_suffix, summary.elapsed_ms
  );
}
