//! # Apply Command
//!
//! This module maps the command-line flags onto a [`NoticeConfig`] and runs
//! the walk.

use std::path::PathBuf;

use addnotice::config::{
  DEFAULT_EXCLUSION_PREFIXES, DEFAULT_ROOT, DEFAULT_TARGET_SUFFIX, NoticeConfig, ROOT_ENV_VAR, SUFFIX_ENV_VAR,
  load_notice_file,
};
use addnotice::info_log;
use addnotice::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use addnotice::output::{print_start_message, print_summary};
use addnotice::processor::Processor;
use addnotice::report::ReportGenerator;
use anyhow::{Context, Result};
use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use tracing::debug;

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
  /// Root directory to walk. Exclusion prefixes are matched against paths
  /// that start with this exact spelling.
  #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT, env = ROOT_ENV_VAR)]
  pub root: PathBuf,

  /// Only files whose name ends with this suffix receive the notice
  #[arg(
    long,
    value_name = "SUFFIX",
    default_value = DEFAULT_TARGET_SUFFIX,
    env = SUFFIX_ENV_VAR,
    value_parser = NonEmptyStringValueParser::new()
  )]
  pub suffix: String,

  /// Leave files whose path starts with this prefix untouched (repeatable,
  /// exact textual prefix, no globs)
  #[arg(long, short = 'e', value_name = "PREFIX")]
  pub exclude: Vec<String>,

  /// Do not use the built-in exclusion prefixes
  #[arg(long)]
  pub no_default_excludes: bool,

  /// Notice text to prepend
  #[arg(long, value_name = "TEXT", conflicts_with = "notice_file")]
  pub notice: Option<String>,

  /// Read the notice text from a file, verbatim
  #[arg(long, short = 'f', value_name = "FILE")]
  pub notice_file: Option<PathBuf>,

  /// Leave files that already start with the notice untouched
  #[arg(long)]
  pub skip_noticed: bool,

  /// Do not echo the new content of rewritten files to stdout
  #[arg(long)]
  pub no_echo: bool,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always). A bare
  /// `--colors` means always; a value must be given as `--colors=WHEN`
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    require_equals = true,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl ApplyArgs {
  /// Builds the run configuration, loading the notice file if one was given.
  pub fn to_config(&self) -> Result<NoticeConfig> {
    let notice = match (&self.notice, &self.notice_file) {
      (Some(text), _) => Some(text.clone()),
      (None, Some(path)) => Some(
        load_notice_file(path).with_context(|| format!("Failed to load notice from {}", path.display()))?,
      ),
      (None, None) => None,
    };

    let mut exclusion_prefixes: Vec<String> = if self.no_default_excludes {
      Vec::new()
    } else {
      DEFAULT_EXCLUSION_PREFIXES.iter().map(|p| (*p).to_string()).collect()
    };
    exclusion_prefixes.extend(self.exclude.iter().cloned());

    let mut config = NoticeConfig::new(self.root.clone())
      .with_suffix(self.suffix.clone())
      .with_exclusions(exclusion_prefixes);
    if let Some(notice) = notice {
      config = config.with_notice(notice);
    }
    config.skip_noticed = self.skip_noticed;

    Ok(config)
  }
}

/// Run the apply command with the given arguments
pub fn run_apply(args: ApplyArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose, args.colors);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let config = args.to_config()?;
  debug!(
    "Exclusion prefixes: {:?}, notice is {} bytes",
    config.exclusion_prefixes,
    config.notice.len()
  );

  let echo = !(args.no_echo || args.quiet);
  let processor = Processor::new(config)?.with_echo(echo);

  print_start_message(processor.config());
  let summary = processor.process()?;
  print_summary(&summary);

  if let Some(ref output_path) = args.report_json {
    ReportGenerator::new(output_path).generate(&summary)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  Ok(())
}
