//! Styled terminal output for `dbt-source-gen`.
//!
//! Uses `anstyle` for ANSI style definitions and `anstream` for auto-detecting
//! terminal capabilities. Output degrades to plain text when piped.

mod styles;

use std::io::Write;

pub use styles::clap_styles;

use styles::{ERROR, SUCCESS, WARNING};

/// Print a success message (green checkmark prefix).
pub fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{SUCCESS}✓{SUCCESS:#} {msg}").ok();
}

/// Print an error message to stderr (red X prefix).
pub fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Print a warning message to stderr (yellow exclamation prefix).
pub fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}
