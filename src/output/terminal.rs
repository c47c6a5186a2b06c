//! Terminal renderer: short styled lines meant for stderr, so they never
//! mix with what the function itself wrote to stdout.

use colored::Colorize;

use crate::output::{CallReport, CheckReport, OutputRenderer};
use crate::template::Directive;

/// Terminal output renderer.
pub struct TerminalRenderer;

fn describe(directive: &Directive) -> String {
    let mut parts = Vec::new();
    if directive.left_align {
        parts.push("left-aligned".to_string());
    }
    if directive.zero_pad && !directive.left_align {
        parts.push("zero-padded".to_string());
    }
    if directive.force_sign {
        parts.push("always signed".to_string());
    } else if directive.space_sign {
        parts.push("space for sign".to_string());
    }
    if directive.width > 0 {
        parts.push(format!("width {}", directive.width));
    }
    if parts.is_empty() {
        "plain integer".to_string()
    } else {
        parts.join(", ")
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render_call(&self, report: &CallReport) -> String {
        let mut out = String::new();
        if let Some(ref captured) = report.output {
            out.push_str(captured);
            if !captured.is_empty() && !captured.ends_with('\n') {
                out.push('\n');
            }
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{} =>", report.function).dimmed(),
            report.return_value.to_string().bold()
        ));
        out
    }

    fn render_check(&self, report: &CheckReport) -> String {
        match (&report.error, &report.directive) {
            (Some(err), _) => format!("{} {}\n", "✖".red().bold(), err),
            (None, Some(directive)) => format!(
                "{} valid template, one integer directive ({})\n",
                "✔".green().bold(),
                describe(directive)
            ),
            (None, None) => format!(
                "{} valid template, no directive (value is ignored)\n",
                "✔".green().bold()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_call_shows_return_value() {
        let report = CallReport::new("MYLOG", serde_json::json!({"x": 100}), 2);
        let output = TerminalRenderer.render_call(&report);
        assert!(output.contains("MYLOG =>"));
        assert!(output.contains('2'));
    }

    #[test]
    fn render_call_terminates_captured_output() {
        let report = CallReport::new("MYPRINTF", serde_json::json!({}), 2)
            .with_output("42".to_string());
        let output = TerminalRenderer.render_call(&report);
        assert!(output.starts_with("42\n"));
    }

    #[test]
    fn render_check_invalid() {
        let output = TerminalRenderer.render_check(&CheckReport::for_template("%s"));
        assert!(output.contains("unsupported directive '%s'"));
    }

    #[test]
    fn render_check_describes_directive() {
        let output = TerminalRenderer.render_check(&CheckReport::for_template("%05d"));
        assert!(output.contains("zero-padded, width 5"), "got: {output}");
        let output = TerminalRenderer.render_check(&CheckReport::for_template("%d"));
        assert!(output.contains("plain integer"));
    }

    #[test]
    fn render_check_without_directive() {
        let output = TerminalRenderer.render_check(&CheckReport::for_template("hi"));
        assert!(output.contains("no directive"));
    }
}
