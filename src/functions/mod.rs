//! The exported functions: truncated base-10 logarithm and restricted
//! formatted printing.
//!
//! Each operation is generic over [`std::io::Write`] so the caller picks
//! the stream. The `*_to` variants are the primitives; [`compute_log`]
//! and [`print_formatted`] write to stdout with default options.
//!
//! Concurrent callers writing to stdout share one stream. Each call holds
//! the stdout lock only for its own writes, so lines from different
//! callers may interleave in any order.

pub mod log;
pub mod printf;

use thiserror::Error;

use crate::models::NonPositivePolicy;
use crate::template::TemplateError;

pub use self::log::{compute_log, compute_log_to};
pub use self::printf::{print_formatted, print_formatted_to};

/// Failure of an exported function.
#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid format template: {0}")]
    InvalidFormatTemplate(#[from] TemplateError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Behaviour switches for [`compute_log_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub policy: NonPositivePolicy,
    /// Write the `Calling log with` / `result :` lines.
    pub trace: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            policy: NonPositivePolicy::Reject,
            trace: true,
        }
    }
}
