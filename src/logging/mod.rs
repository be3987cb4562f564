//! # Logging Module
//!
//! This module provides logging utilities for the addnotice tool, including:
//! - Verbose logging that can be enabled/disabled
//! - Quiet mode that suppresses everything except errors
//! - Structured `tracing` diagnostics on stderr
//!
//! ## Example
//!
//! ```rust
//! use addnotice::logging::{ColorMode, set_verbose};
//! use addnotice::{info_log, verbose_log};
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Set color mode to Auto (uses owo-colors' automatic TTY detection)
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Processing file: {}", "Assets/A.cs");
//!
//! // Log an info message (goes to stderr unless quiet)
//! info_log!("Wrote report to {}", "report.json");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// It uses the same format string syntax as the standard [`eprintln!`]
/// macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stderr unless quiet mode is enabled.
///
/// Stdout is reserved for the audit echo, so unlike `println!` this writes
/// to stderr.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Internal function used by [`info_log!`] to print with colors if enabled.
pub fn print_info_log(message: &str) {
  eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()));
}
