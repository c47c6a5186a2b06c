//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names
//! and the fixed sizes shared with the C ABI.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "stmath";

/// Crate version, as reported by `stmath version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.stmath.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".stmath.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "stmath";

/// Capacity of a template buffer, including the terminating NUL.
///
/// Matches `STRING[80]` on the Structured Text side.
pub const TEXT_CAPACITY: usize = 81;

/// Value returned by the logarithm when the operand is non-positive and
/// the sentinel policy is active, and by `MYLOG` on any failure.
pub const LOG_SENTINEL: i32 = i32::MIN;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG_POLICY: &str = "STMATH_LOG_POLICY";
pub const ENV_TRACE: &str = "STMATH_TRACE";
pub const ENV_FORMAT: &str = "STMATH_FORMAT";
pub const ENV_LOG_FILTER: &str = "STMATH_LOG";
