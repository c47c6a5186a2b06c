//! Parameter blocks passed to the exported functions.

use serde::Serialize;

use crate::functions::FunctionError;
use crate::models::text::TemplateText;

/// Operand of the base-10 logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRequest {
    pub x: i32,
}

impl LogRequest {
    pub fn new(x: i32) -> Self {
        Self { x }
    }
}

/// A format template and the single integer substituted into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintRequest {
    pub text: TemplateText,
    pub value: i32,
}

impl PrintRequest {
    /// Build a request, checking that `text` fits the template buffer.
    pub fn new(text: &str, value: i32) -> Result<Self, FunctionError> {
        Ok(Self {
            text: TemplateText::new(text)?,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_request_keeps_text_and_value() {
        let req = PrintRequest::new("Value: %d", 42).unwrap();
        assert_eq!(req.text.as_str(), "Value: %d");
        assert_eq!(req.value, 42);
    }

    #[test]
    fn print_request_rejects_overlong_text() {
        assert!(PrintRequest::new(&"%".repeat(81), 0).is_err());
    }

    #[test]
    fn requests_serialize_for_reports() {
        let json = serde_json::to_value(PrintRequest::new("%d", 7).unwrap()).unwrap();
        assert_eq!(json["text"], "%d");
        assert_eq!(json["value"], 7);
        let json = serde_json::to_value(LogRequest::new(10)).unwrap();
        assert_eq!(json["x"], 10);
    }
}
