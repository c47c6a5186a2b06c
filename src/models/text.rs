//! Fixed-capacity template text.
//!
//! Mirrors a `STRING[80]` parameter: 80 bytes of content plus the
//! terminating NUL, stored inline so a parameter block has a fixed shape.

use std::ffi::c_char;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::TEXT_CAPACITY;
use crate::functions::FunctionError;
use crate::template::TemplateError;

/// Bounded UTF-8 text of at most `TEXT_CAPACITY - 1` bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TemplateText {
    buf: [u8; TEXT_CAPACITY],
    len: usize,
}

impl TemplateText {
    /// Longest content a template may hold, in bytes.
    pub const MAX_LEN: usize = TEXT_CAPACITY - 1;

    /// Copy `text` into a new buffer.
    ///
    /// Fails with `InvalidArgument` when the text does not fit or
    /// contains a NUL, which would silently cut it short on the C side.
    pub fn new(text: &str) -> Result<Self, FunctionError> {
        if text.len() > Self::MAX_LEN {
            return Err(FunctionError::InvalidArgument(format!(
                "template is {} bytes, at most {} fit",
                text.len(),
                Self::MAX_LEN
            )));
        }
        if text.contains('\0') {
            return Err(FunctionError::InvalidArgument(
                "template contains a NUL byte".to_string(),
            ));
        }

        let mut buf = [0u8; TEXT_CAPACITY];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Self {
            buf,
            len: text.len(),
        })
    }

    /// Decode a NUL-terminated C buffer.
    pub fn from_c_buffer(raw: &[c_char; TEXT_CAPACITY]) -> Result<Self, TemplateError> {
        let bytes: Vec<u8> = raw.iter().map(|&c| c as u8).collect();
        let len = bytes
            .iter()
            .position(|&b| b == 0)
            .ok_or(TemplateError::Unterminated {
                capacity: TEXT_CAPACITY,
            })?;
        let text = std::str::from_utf8(&bytes[..len]).map_err(|e| TemplateError::NotUtf8 {
            offset: e.valid_up_to(),
        })?;

        let mut buf = [0u8; TEXT_CAPACITY];
        buf[..len].copy_from_slice(text.as_bytes());
        Ok(Self { buf, len })
    }

    /// Content as a string slice (without the terminator).
    pub fn as_str(&self) -> &str {
        // Both constructors only ever store validated UTF-8.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl fmt::Debug for TemplateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TemplateText").field(&self.as_str()).finish()
    }
}

impl fmt::Display for TemplateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemplateText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_buffer(text: &[u8]) -> [c_char; TEXT_CAPACITY] {
        let mut raw = [0 as c_char; TEXT_CAPACITY];
        for (slot, &b) in raw.iter_mut().zip(text) {
            *slot = b as c_char;
        }
        raw
    }

    #[test]
    fn new_accepts_max_len() {
        let text = "x".repeat(TemplateText::MAX_LEN);
        let t = TemplateText::new(&text).unwrap();
        assert_eq!(t.as_str().len(), 80);
        assert_eq!(t.as_str(), text);
    }

    #[test]
    fn new_rejects_overlong() {
        let text = "x".repeat(TemplateText::MAX_LEN + 1);
        let err = TemplateText::new(&text).unwrap_err();
        assert!(matches!(err, FunctionError::InvalidArgument(_)), "got: {err}");
    }

    #[test]
    fn new_rejects_interior_nul() {
        let err = TemplateText::new("a\0b").unwrap_err();
        assert!(err.to_string().contains("NUL"), "got: {err}");
    }

    #[test]
    fn empty_text() {
        let t = TemplateText::new("").unwrap();
        assert!(t.as_str().is_empty());
        assert_eq!(t.to_string(), "");
    }

    #[test]
    fn from_c_buffer_stops_at_nul() {
        let t = TemplateText::from_c_buffer(&c_buffer(b"Value: %d\0garbage")).unwrap();
        assert_eq!(t.as_str(), "Value: %d");
    }

    #[test]
    fn from_c_buffer_requires_terminator() {
        let raw = [b'a' as c_char; TEXT_CAPACITY];
        let err = TemplateText::from_c_buffer(&raw).unwrap_err();
        assert_eq!(err, TemplateError::Unterminated { capacity: 81 });
    }

    #[test]
    fn from_c_buffer_rejects_invalid_utf8() {
        let err = TemplateText::from_c_buffer(&c_buffer(b"ok\xff\0")).unwrap_err();
        assert_eq!(err, TemplateError::NotUtf8 { offset: 2 });
    }

    #[test]
    fn serializes_as_plain_string() {
        let t = TemplateText::new("%d items").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"%d items\"");
    }
}
