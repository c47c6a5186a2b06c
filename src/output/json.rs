//! JSON output renderer.
//!
//! Call reports come out as `{"function", "input", "return", "output"}`;
//! check reports as `{"template", "valid", "directive" | "error"}`.

use serde::Serialize;

use crate::output::{CallReport, CheckReport, OutputRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

fn pretty(value: &impl Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl OutputRenderer for JsonRenderer {
    fn render_call(&self, report: &CallReport) -> String {
        pretty(report)
    }

    fn render_check(&self, report: &CheckReport) -> String {
        pretty(report)
    }
}
