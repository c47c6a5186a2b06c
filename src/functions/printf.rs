//! Formatted printing of a single integer.

use std::io::Write;

use tracing::debug;

use super::FunctionError;
use crate::models::PrintRequest;
use crate::template;

/// Render `request.text` with `request.value` and write it to `out`.
///
/// The template is validated before anything is written, so a rejected
/// template produces no output. No newline is added. Returns the number
/// of bytes written, which equals the character count for ASCII text.
pub fn print_formatted_to<W: Write + ?Sized>(
    out: &mut W,
    request: &PrintRequest,
) -> Result<usize, FunctionError> {
    let template = template::parse(request.text.as_str()).inspect_err(|e| {
        debug!(template = request.text.as_str(), error = %e, "template rejected");
    })?;

    let rendered = template.render(request.value);
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(rendered.len())
}

/// [`print_formatted_to`] on stdout.
pub fn print_formatted(request: &PrintRequest) -> Result<usize, FunctionError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    print_formatted_to(&mut handle, request)
}
