//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// One-line description shown in `--help`.
pub const ABOUT: &str =
    "Call the stmath external functions (MYLOG, MYPRINTF) from the command line";
