//! Template parser.
//!
//! Walks the text once, collapsing `%%` into literal text and turning the
//! single permitted directive into a [`Directive`]. Offsets in errors are
//! byte offsets of the `%` that opens the offending directive.

use std::iter::Peekable;
use std::str::CharIndices;

use super::{Directive, Piece, Template, TemplateError};

/// Widest field width accepted, in digits.
const MAX_WIDTH_DIGITS: usize = 2;

/// Parse `text` into a [`Template`].
pub fn parse(text: &str) -> Result<Template, TemplateError> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut seen_directive = false;
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        match chars.peek() {
            None => return Err(TemplateError::Incomplete { offset }),
            Some(&(_, '%')) => {
                chars.next();
                literal.push('%');
                continue;
            }
            Some(_) => {}
        }

        let directive = parse_directive(text, offset, &mut chars)?;
        if seen_directive {
            return Err(TemplateError::TooManyDirectives { offset });
        }
        seen_directive = true;

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Integer(directive));
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }

    Ok(Template { pieces })
}

/// Parse flags, width and conversion following the `%` at `offset`.
fn parse_directive(
    text: &str,
    offset: usize,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<Directive, TemplateError> {
    let mut directive = Directive::default();

    while let Some(&(_, flag)) = chars.peek() {
        let slot = match flag {
            '-' => &mut directive.left_align,
            '0' => &mut directive.zero_pad,
            '+' => &mut directive.force_sign,
            ' ' => &mut directive.space_sign,
            _ => break,
        };
        if *slot {
            return Err(TemplateError::DuplicateFlag { offset, flag });
        }
        *slot = true;
        chars.next();
    }

    let mut digits = String::new();
    while let Some(d) = chars.peek().map(|&(_, c)| c).filter(char::is_ascii_digit) {
        digits.push(d);
        chars.next();
    }
    if digits.len() > MAX_WIDTH_DIGITS {
        let end = chars.peek().map_or(text.len(), |&(at, _)| at);
        return Err(unsupported(text, offset, end));
    }
    if !digits.is_empty() {
        directive.width = digits.parse().unwrap_or(0);
    }

    match chars.next() {
        Some((_, 'd' | 'i')) => Ok(directive),
        Some((at, other)) => Err(unsupported(text, offset, at + other.len_utf8())),
        None => Err(TemplateError::Incomplete { offset }),
    }
}

fn unsupported(text: &str, offset: usize, end: usize) -> TemplateError {
    TemplateError::UnsupportedConversion {
        offset,
        directive: text[offset..end].to_string(),
    }
}
