//! Canonical byte serialization.
//!
//! [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
//!
//! Two forms are produced:
//! - "Empty attribute syntax": just the attribute name, used for boolean
//!   attributes that are true. False boolean attributes produce no bytes.
//! - "Double-quoted attribute value syntax": `name="value"`.
//!
//! Values are written as UTF-8 without escaping. Escaping quotes and
//! ampersands is the job of whatever assembles the document.

use crate::attribute::{BooleanAttribute, StringAttribute};

/// Bytes a boolean attribute named `name` serializes to.
#[must_use]
pub const fn boolean_len(name: &str, value: bool) -> usize {
    if value { name.len() } else { 0 }
}

/// Bytes a string attribute serializes to: name, `="`, value, `"`.
#[must_use]
pub const fn string_len(name: &str, value: &str) -> usize {
    name.len() + 3 + value.len()
}

/// Append a boolean attribute: `name` when true, nothing when false.
pub fn write_boolean(name: &str, value: bool, out: &mut Vec<u8>) {
    if value {
        out.extend_from_slice(name.as_bytes());
    }
}

/// Append a string attribute: `name="value"`.
pub fn write_string(name: &str, value: &str, out: &mut Vec<u8>) {
    out.reserve(string_len(name, value));
    out.extend_from_slice(name.as_bytes());
    out.push(b'=');
    out.push(b'"');
    out.extend_from_slice(value.as_bytes());
    out.push(b'"');
}

/// Serialize a typed boolean attribute.
#[must_use]
pub fn serialize_boolean<A: BooleanAttribute>(attribute: &A) -> Vec<u8> {
    let mut out = Vec::with_capacity(boolean_len(A::NAME, attribute.value()));
    write_boolean(A::NAME, attribute.value(), &mut out);
    out
}

/// Serialize a typed string attribute.
#[must_use]
pub fn serialize_string<A: StringAttribute>(attribute: &A) -> Vec<u8> {
    let value = attribute.as_str();
    let mut out = Vec::with_capacity(string_len(A::NAME, value));
    write_string(A::NAME, value, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_boolean() {
        let mut out = Vec::new();
        write_boolean("disabled", false, &mut out);
        assert!(out.is_empty());
        write_boolean("disabled", true, &mut out);
        assert_eq!(out, b"disabled");
    }

    #[test]
    fn test_write_string_appends() {
        let mut out = b"<a ".to_vec();
        write_string("href", "/", &mut out);
        assert_eq!(out, b"<a href=\"/\"");
    }

    #[test]
    fn test_string_len_matches_output() {
        let mut out = Vec::new();
        write_string("id", "日本", &mut out);
        assert_eq!(out.len(), string_len("id", "日本"));
        assert_eq!(out, b"id=\"\xe6\x97\xa5\xe6\x9c\xac\"");
        assert_eq!(out.len(), 11);
    }

    #[test]
    fn test_value_is_not_escaped() {
        let mut out = Vec::new();
        write_string("title", "a \"b\" & c", &mut out);
        assert_eq!(out, b"title=\"a \"b\" & c\"");
    }
}
