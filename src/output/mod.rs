//! Output renderers for CLI reports: terminal and JSON.

pub mod json;
pub mod terminal;

use std::io::{self, Write};

use serde::Serialize;

use crate::functions::FunctionError;
use crate::models::{OutputFormat, TemplateText};
use crate::template::{self, Directive};

/// Outcome of one function call made from the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct CallReport {
    /// Exported symbol name (`MYLOG`, `MYPRINTF`).
    pub function: &'static str,
    /// The parameter block, as passed.
    pub input: serde_json::Value,
    #[serde(rename = "return")]
    pub return_value: i64,
    /// Captured stream output; `None` when it went straight to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl CallReport {
    pub fn new(function: &'static str, input: impl Serialize, return_value: i64) -> Self {
        Self {
            function,
            input: serde_json::to_value(input).unwrap_or(serde_json::Value::Null),
            return_value,
            output: None,
        }
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }
}

/// Outcome of validating a template.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub template: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Parse `text` and record the result.
    pub fn for_template(text: &str) -> Self {
        let parsed = TemplateText::new(text)
            .map_err(|e| e.to_string())
            .and_then(|t| template::parse(t.as_str()).map_err(|e| e.to_string()));
        match parsed {
            Ok(parsed) => Self {
                template: text.to_string(),
                valid: true,
                directive: parsed.directive().copied(),
                error: None,
            },
            Err(e) => Self {
                template: text.to_string(),
                valid: false,
                directive: None,
                error: Some(e),
            },
        }
    }
}

/// Run `call` against stdout (text) or a capture buffer (json).
///
/// Returns the function's result and, for json, what it wrote.
pub fn invoke<F>(format: OutputFormat, call: F) -> Result<(i64, Option<String>), FunctionError>
where
    F: FnOnce(&mut dyn Write) -> Result<i64, FunctionError>,
{
    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            Ok((call(&mut handle)?, None))
        }
        OutputFormat::Json => {
            let mut buf = Vec::new();
            let ret = call(&mut buf)?;
            Ok((ret, Some(String::from_utf8_lossy(&buf).into_owned())))
        }
    }
}

/// Trait for rendering reports to an output format.
pub trait OutputRenderer {
    fn render_call(&self, report: &CallReport) -> String;
    fn render_check(&self, report: &CheckReport) -> String;
}

/// The renderer for a configured format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Text => Box::new(terminal::TerminalRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}
