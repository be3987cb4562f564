//! # addnotice
//!
//! A tool that walks a source tree and prepends a fixed license notice to
//! every file whose name ends with a target suffix, unless the file's path
//! starts with one of the configured exclusion prefixes.
//!
//! Files are rewritten in place as `notice + original content`. There is no
//! backup, dry run or idempotence check by default: a second run adds the
//! notice a second time.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use addnotice::NoticeConfig;
//! use addnotice::processor::apply_notices;
//!
//! fn main() -> addnotice::Result<()> {
//!     let config = NoticeConfig::new("Assets")
//!         .with_suffix(".cs")
//!         .with_exclusions(["Assets/Fungus/Thirdparty/CSVParser/"])
//!         .with_notice("// Copyright Example\n\n");
//!
//!     let summary = apply_notices(&config)?;
//!     println!("Added notice to {} files", summary.noticed);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Tree walk and in-place rewrite
//! * [`file_filter`] - Suffix and exclusion-prefix classification
//! * [`config`] - Run configuration and reference defaults
//! * [`report`] - Per-run summary and JSON report
//! * [`logging`] - Output modes and tracing setup

pub mod config;
pub mod error;
pub mod file_filter;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;

pub use config::NoticeConfig;
pub use error::{NoticeError, Result};
