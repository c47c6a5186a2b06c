//! stmath — external functions for Structured Text programs (library crate).
//!
//! Exposes the functions as a Rust API ([`functions`]), as C symbols
//! `MYLOG`/`MYPRINTF` ([`ffi`]), and the pieces the `stmath` binary and
//! integration tests build on.

pub mod config;
pub mod constants;
pub mod env;
pub mod ffi;
pub mod functions;
pub mod logging;
pub mod models;
pub mod output;
pub mod template;
