//! C ABI entry points.
//!
//! A Structured Text program declares these as external functions taking
//! a single `VAR_INPUT` block; the compiler passes that block by pointer.
//! The layouts below must stay in sync with the ST declarations:
//!
//! ```text
//! {external} FUNCTION MYLOG : DINT
//!   VAR_INPUT x : DINT; END_VAR
//! END_FUNCTION
//!
//! {external} FUNCTION MYPRINTF : DINT
//!   VAR_INPUT text : STRING; value : DINT; END_VAR
//! END_FUNCTION
//! ```
//!
//! Both functions write to stdout with default options. Errors never
//! cross the boundary: `MYLOG` returns [`LOG_SENTINEL`] and `MYPRINTF`
//! returns `-1`, and the cause is logged.

use std::ffi::c_char;

use tracing::warn;

use crate::constants::{LOG_SENTINEL, TEXT_CAPACITY};
use crate::functions::{self, FunctionError};
use crate::models::{LogRequest, PrintRequest, TemplateText};

/// Parameter block of `MYLOG`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MylogInterface {
    pub x: i32,
}

/// Parameter block of `MYPRINTF`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MyprintfInterface {
    pub text: [c_char; TEXT_CAPACITY],
    pub value: i32,
}

impl MyprintfInterface {
    /// Build a block from Rust text, NUL-terminated like the ST side does.
    pub fn new(text: &str, value: i32) -> Result<Self, FunctionError> {
        let checked = TemplateText::new(text)?;
        let mut raw = [0 as c_char; TEXT_CAPACITY];
        for (slot, &b) in raw.iter_mut().zip(checked.as_str().as_bytes()) {
            *slot = b as c_char;
        }
        Ok(Self { text: raw, value })
    }
}

impl TryFrom<&MyprintfInterface> for PrintRequest {
    type Error = FunctionError;

    fn try_from(param: &MyprintfInterface) -> Result<Self, Self::Error> {
        Ok(PrintRequest {
            text: TemplateText::from_c_buffer(&param.text)?,
            value: param.value,
        })
    }
}

fn null_param(function: &str) -> FunctionError {
    FunctionError::InvalidArgument(format!("{function} called with a null parameter block"))
}

/// Truncated base-10 logarithm of `param->x`.
///
/// # Safety
///
/// `param` must be null or point to a valid, aligned `MylogInterface`
/// for the duration of the call.
#[unsafe(export_name = "MYLOG")]
pub unsafe extern "C" fn mylog(param: *const MylogInterface) -> i32 {
    // SAFETY: the caller guarantees validity; null is handled by `as_ref`.
    let result = match unsafe { param.as_ref() } {
        Some(param) => functions::compute_log(&LogRequest::new(param.x)),
        None => Err(null_param("MYLOG")),
    };

    result.unwrap_or_else(|e| {
        warn!(error = %e, "MYLOG failed");
        LOG_SENTINEL
    })
}

/// Print `param->text` with `param->value` substituted.
///
/// Returns the number of bytes written or `-1`.
///
/// # Safety
///
/// `param` must be null or point to a valid, aligned `MyprintfInterface`
/// for the duration of the call.
#[unsafe(export_name = "MYPRINTF")]
pub unsafe extern "C" fn myprintf(param: *const MyprintfInterface) -> i32 {
    // SAFETY: the caller guarantees validity; null is handled by `as_ref`.
    let result = match unsafe { param.as_ref() } {
        Some(param) => PrintRequest::try_from(param).and_then(|req| functions::print_formatted(&req)),
        None => Err(null_param("MYPRINTF")),
    };

    match result {
        // A template is at most 80 bytes and widens by at most a formatted
        // i32 plus padding, so the count always fits.
        Ok(written) => i32::try_from(written).unwrap_or(i32::MAX),
        Err(e) => {
            warn!(error = %e, "MYPRINTF failed");
            -1
        }
    }
}
