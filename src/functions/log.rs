//! Truncated base-10 logarithm.

use std::io::Write;

use tracing::debug;

use super::{FunctionError, LogOptions};
use crate::constants::LOG_SENTINEL;
use crate::models::{LogRequest, NonPositivePolicy};

/// Compute `floor(log10(x))`, tracing input and result to `out`.
///
/// Writes `Calling log with <x>` before and `result :  <res>` after the
/// computation (when `options.trace` is set). For `x <= 0` the policy
/// decides: `Reject` fails with `InvalidArgument` after the first line,
/// `Sentinel` returns [`LOG_SENTINEL`].
pub fn compute_log_to<W: Write + ?Sized>(
    out: &mut W,
    request: &LogRequest,
    options: &LogOptions,
) -> Result<i32, FunctionError> {
    if options.trace {
        writeln!(out, "Calling log with {}", request.x)?;
    }

    let result = match request.x.checked_ilog10() {
        // ilog10 of an i32 is at most 9.
        Some(exponent) => exponent as i32,
        None => match options.policy {
            NonPositivePolicy::Reject => {
                out.flush()?;
                debug!(x = request.x, "rejecting non-positive logarithm operand");
                return Err(FunctionError::InvalidArgument(format!(
                    "logarithm is undefined for {}",
                    request.x
                )));
            }
            NonPositivePolicy::Sentinel => {
                debug!(x = request.x, "non-positive logarithm operand, returning sentinel");
                LOG_SENTINEL
            }
        },
    };

    if options.trace {
        writeln!(out, "result :  {result}")?;
    }
    out.flush()?;
    Ok(result)
}

/// [`compute_log_to`] on stdout with default options.
pub fn compute_log(request: &LogRequest) -> Result<i32, FunctionError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    compute_log_to(&mut handle, request, &LogOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(x: i32, options: LogOptions) -> (Result<i32, FunctionError>, String) {
        let mut out = Vec::new();
        let result = compute_log_to(&mut out, &LogRequest::new(x), &options);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn truncates_toward_zero() {
        for (x, expected) in [(1, 0), (9, 0), (10, 1), (99, 1), (100, 2), (999, 2), (1000, 3)] {
            let (result, _) = run(x, LogOptions::default());
            assert_eq!(result.unwrap(), expected, "log10({x})");
        }
    }

    #[test]
    fn exact_powers_of_ten() {
        let mut x = 1i32;
        for k in 0..=9 {
            let (result, _) = run(x, LogOptions::default());
            assert_eq!(result.unwrap(), k);
            x = x.saturating_mul(10);
        }
    }

    #[test]
    fn largest_operand() {
        assert_eq!(run(i32::MAX, LogOptions::default()).0.unwrap(), 9);
    }

    #[test]
    fn trace_lines_are_byte_exact() {
        let (result, output) = run(100, LogOptions::default());
        assert_eq!(result.unwrap(), 2);
        assert_eq!(output, "Calling log with 100\nresult :  2\n");
    }

    #[test]
    fn trace_can_be_disabled() {
        let options = LogOptions {
            trace: false,
            ..LogOptions::default()
        };
        let (result, output) = run(1000, options);
        assert_eq!(result.unwrap(), 3);
        assert!(output.is_empty());
    }

    #[test]
    fn reject_policy_fails_after_echoing_input() {
        for x in [0, -1, i32::MIN] {
            let (result, output) = run(x, LogOptions::default());
            let err = result.unwrap_err();
            assert!(matches!(err, FunctionError::InvalidArgument(_)), "got: {err}");
            assert_eq!(output, format!("Calling log with {x}\n"));
        }
    }

    #[test]
    fn sentinel_policy_returns_min() {
        let options = LogOptions {
            policy: NonPositivePolicy::Sentinel,
            trace: true,
        };
        let (result, output) = run(0, options);
        assert_eq!(result.unwrap(), i32::MIN);
        assert_eq!(output, "Calling log with 0\nresult :  -2147483648\n");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = run(12345, LogOptions::default());
        let second = run(12345, LogOptions::default());
        assert_eq!(first.0.unwrap(), second.0.unwrap());
        assert_eq!(first.1, second.1);
    }
}
