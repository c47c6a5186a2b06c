//! Restricted `printf`-style templates.
//!
//! Only integer substitution is supported: at most one `%d`/`%i`
//! directive with optional `-0+ ` flags and a width of up to two digits,
//! plus `%%` for a literal percent sign. Anything else is rejected at
//! parse time, so rendering can never read an argument that was not
//! supplied.

pub mod parser;

use serde::Serialize;
use thiserror::Error;

pub use parser::parse;

/// Why a template was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template ends inside a directive starting at byte {offset}")]
    Incomplete { offset: usize },

    #[error("unsupported directive '{directive}' at byte {offset} (only %d and %i take an argument)")]
    UnsupportedConversion { offset: usize, directive: String },

    #[error("flag '{flag}' repeated in directive at byte {offset}")]
    DuplicateFlag { offset: usize, flag: char },

    #[error("second directive at byte {offset}, but only one value is supplied")]
    TooManyDirectives { offset: usize },

    #[error("template buffer has no terminator within {capacity} bytes")]
    Unterminated { capacity: usize },

    #[error("template is not valid UTF-8 after byte {offset}")]
    NotUtf8 { offset: usize },
}

/// One integer conversion with its flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub left_align: bool,
    pub zero_pad: bool,
    pub force_sign: bool,
    pub space_sign: bool,
    pub width: usize,
}

impl Directive {
    /// Format `value` the way C `printf` formats it for this directive.
    pub fn format(&self, value: i32) -> String {
        let digits = value.unsigned_abs().to_string();
        let sign = if value < 0 {
            "-"
        } else if self.force_sign {
            "+"
        } else if self.space_sign {
            " "
        } else {
            ""
        };

        let len = sign.len() + digits.len();
        if len >= self.width {
            return format!("{sign}{digits}");
        }

        let pad = self.width - len;
        if self.left_align {
            format!("{sign}{digits}{}", " ".repeat(pad))
        } else if self.zero_pad {
            format!("{sign}{}{digits}", "0".repeat(pad))
        } else {
            format!("{}{sign}{digits}", " ".repeat(pad))
        }
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Text copied as-is (`%%` already collapsed to `%`).
    Literal(String),
    /// The integer substitution.
    Integer(Directive),
}

/// A validated template, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    #[cfg(test)]
    pub(crate) fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The integer directive, if the template has one.
    pub fn directive(&self) -> Option<&Directive> {
        self.pieces.iter().find_map(|p| match p {
            Piece::Integer(d) => Some(d),
            Piece::Literal(_) => None,
        })
    }

    /// Substitute `value` and return the finished text.
    ///
    /// A template without a directive ignores `value`.
    pub fn render(&self, value: i32) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Integer(d) => out.push_str(&d.format(value)),
            }
        }
        out
    }
}
