//! Attributes whose name is only known at runtime.
//!
//! Typed attributes carry their name in the type. [`RawAttribute`] carries
//! it in the value instead, for `data-*` attributes, names read from user
//! input, and similar cases. It serializes through the same writers as the
//! typed attributes, so the bytes are identical for the same name and value.

use crate::attribute::{AttributeBytes, BooleanAttribute, StringAttribute};
use crate::serialize::{boolean_len, string_len, write_boolean, write_string};

/// An attribute with a runtime name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawAttribute {
    /// A boolean attribute: emitted as its bare name when true.
    Boolean {
        /// Wire name.
        name: String,
        /// Presence.
        value: bool,
    },
    /// A string attribute: emitted as `name="value"`.
    String {
        /// Wire name.
        name: String,
        /// Text value.
        value: String,
    },
}

impl RawAttribute {
    /// A boolean attribute named `name`.
    #[must_use]
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::Boolean {
            name: name.into(),
            value,
        }
    }

    /// A string attribute named `name`.
    #[must_use]
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::String {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Erase the type of a boolean attribute.
    #[must_use]
    pub fn of_boolean<A: BooleanAttribute>(attribute: &A) -> Self {
        Self::boolean(A::NAME, attribute.value())
    }

    /// Erase the type of a string attribute.
    #[must_use]
    pub fn of_string<A: StringAttribute>(attribute: &A) -> Self {
        Self::string(A::NAME, attribute.as_str())
    }

    /// Whether this is a boolean attribute.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean { .. })
    }
}

impl AttributeBytes for RawAttribute {
    fn attribute_name(&self) -> &str {
        match self {
            Self::Boolean { name, .. } | Self::String { name, .. } => name,
        }
    }

    fn attribute_value(&self) -> Option<&str> {
        match self {
            Self::Boolean { value, .. } => value.then_some(""),
            Self::String { value, .. } => Some(value),
        }
    }

    fn serialized_len(&self) -> usize {
        match self {
            Self::Boolean { name, value } => boolean_len(name, *value),
            Self::String { name, value } => string_len(name, value),
        }
    }

    fn write_bytes(&self, out: &mut Vec<u8>) {
        match self {
            Self::Boolean { name, value } => write_boolean(name, *value, out),
            Self::String { name, value } => write_string(name, value, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Checked, Value};

    #[test]
    fn test_raw_matches_typed_bytes() {
        let checked = Checked::new(true);
        assert_eq!(
            RawAttribute::of_boolean(&checked).to_bytes(),
            checked.to_bytes()
        );

        let value = Value::new("on");
        assert_eq!(RawAttribute::of_string(&value).to_bytes(), value.to_bytes());
    }

    #[test]
    fn test_data_attribute() {
        let raw = RawAttribute::string("data-id", "42");
        assert_eq!(raw.attribute_name(), "data-id");
        assert_eq!(raw.attribute_value(), Some("42"));
        assert_eq!(raw.to_markup_string(), "data-id=\"42\"");
    }

    #[test]
    fn test_false_boolean_is_not_emitted() {
        let raw = RawAttribute::boolean("hidden", false);
        assert!(raw.is_boolean());
        assert!(!raw.is_emitted());
        assert_eq!(raw.attribute_value(), None);
        assert!(raw.to_bytes().is_empty());
    }
}
