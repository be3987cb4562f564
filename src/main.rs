//! # addnotice
//!
//! A tool that prepends a license notice to every source file in a tree.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_apply};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_apply(cli.apply_args)
}
