//! Untyped value trees as seen by a host.

use serde_json::Value;

/// A node in a host's view of an engine value.
///
/// Debuggers expose struct members by name, array slots by index, and
/// scalars as integers or text. Implementations return `None` whenever the
/// node does not have the requested shape.
pub trait FieldSource {
    /// Named member of a struct-like node.
    fn child(&self, name: &str) -> Option<&Self>;

    /// Indexed slot of an array-like node.
    fn element(&self, index: usize) -> Option<&Self>;

    fn as_unsigned(&self) -> Option<u64>;

    fn as_flag(&self) -> Option<bool>;

    fn as_text(&self) -> Option<&str>;

    /// True for an explicit "no value" node.
    fn is_null(&self) -> bool;
}

/// Parses a raw word printed as decimal or `0x`/`0X` hex.
///
/// Surrounding whitespace is ignored and `_` digit separators are allowed in
/// either base, the forms debuggers and people type words in.
pub fn parse_unsigned(text: &str) -> Option<u64> {
    let text = text.trim();
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u64::from_str_radix(&digits, radix).ok()
}

impl FieldSource for Value {
    fn child(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    /// Accepts JSON integers plus any text [`parse_unsigned`] accepts.
    fn as_unsigned(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => parse_unsigned(s),
            _ => None,
        }
    }

    /// Accepts JSON booleans, `0`/`1`, and the text forms `"true"`/`"false"`.
    fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}
