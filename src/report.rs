//! # Report Module
//!
//! This module records what a run did with every candidate file (every file
//! whose name ends with the target suffix) and can write the result as a
//! JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Information about a candidate file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
  /// Constructed path of the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Action taken on the file
  pub action: FileAction,
  /// Exclusion prefix that matched, if the file was excluded
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub excluded_by: Option<String>,
}

/// Possible outcomes for a candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
  /// Notice was prepended and the file rewritten
  Noticed,
  /// File already started with the notice and the guard was enabled
  AlreadyNoticed,
  /// File matched an exclusion prefix
  Excluded,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::{Path, PathBuf};

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&crate::file_filter::constructed_path(path))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Totals and per-file records of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
  /// Walk root as given
  #[serde(with = "path_serialization")]
  pub root: PathBuf,
  /// Every file discovered by the walk
  pub files_scanned: usize,
  /// Files skipped because their name lacks the target suffix
  pub wrong_suffix: usize,
  /// Files rewritten with the notice
  pub noticed: usize,
  /// Files left alone by the already-noticed guard
  pub already_noticed: usize,
  /// Files skipped by an exclusion prefix
  pub excluded: usize,
  /// Wall-clock time of the run in milliseconds
  pub elapsed_ms: u64,
  /// One entry per candidate file, in visitation order
  pub files: Vec<FileReport>,
}

impl RunSummary {
  pub fn new(root: &Path) -> Self {
    Self {
      root: root.to_path_buf(),
      ..Self::default()
    }
  }

  /// Counts a discovered file without the target suffix.
  pub const fn record_wrong_suffix(&mut self) {
    self.files_scanned += 1;
    self.wrong_suffix += 1;
  }

  /// Counts and records a candidate file.
  pub fn record(&mut self, report: FileReport) {
    self.files_scanned += 1;
    match report.action {
      FileAction::Noticed => self.noticed += 1,
      FileAction::AlreadyNoticed => self.already_noticed += 1,
      FileAction::Excluded => self.excluded += 1,
    }
    self.files.push(report);
  }

  pub fn set_elapsed(&mut self, elapsed: Duration) {
    self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
  }

  /// Files whose content was rewritten, in visitation order.
  pub fn noticed_files(&self) -> impl Iterator<Item = &Path> {
    self
      .files
      .iter()
      .filter(|f| f.action == FileAction::Noticed)
      .map(|f| f.path.as_path())
  }
}

/// Report generator writing a [`RunSummary`] as JSON
pub struct ReportGenerator<'a> {
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(output_path: &'a Path) -> Self {
    Self { output_path }
  }

  /// Serialises `summary` and writes it to the output path.
  pub fn generate(&self, summary: &RunSummary) -> Result<()> {
    let content = serde_json::to_string_pretty(summary).context("Failed to serialize run report")?;
    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }
}
