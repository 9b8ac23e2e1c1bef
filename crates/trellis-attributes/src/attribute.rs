//! [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
//! and the two attribute value disciplines.
//!
//! [§ 2.3.2 Boolean attributes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#boolean-attributes)
//!
//! "The presence of a boolean attribute on an element represents the true
//! value, and the absence of the attribute represents the false value."
//!
//! Every other attribute is modeled as a string attribute, serialized as
//! `name="value"` whenever it exists. Whether a string attribute exists at
//! all is decided by the element holding it as an `Option`.

use std::fmt;
use std::hash::Hash;

use crate::encoding::TextEncoding;
use crate::error::DecodeError;

/// A named HTML attribute type.
///
/// The name is a constant of the type, not of the value: every `Href` is
/// called `href`.
pub trait Attribute: Clone + Eq + Hash + fmt::Debug {
    /// Wire name, e.g. `"href"`.
    const NAME: &'static str;
}

/// An attribute whose presence is its value.
pub trait BooleanAttribute: Attribute + Copy {
    /// Wrap a raw `bool`. Never fails: every `bool` is a valid state.
    fn from_raw(value: bool) -> Self;

    /// The wrapped `bool`.
    fn value(&self) -> bool;

    /// Whether the attribute appears in markup.
    fn is_present(&self) -> bool {
        self.value()
    }

    /// The attribute set to `true`.
    fn present() -> Self {
        Self::from_raw(true)
    }

    /// Both states, `true` first.
    fn all_cases() -> [Self; 2] {
        [Self::from_raw(true), Self::from_raw(false)]
    }
}

/// An attribute carrying a text value.
///
/// The empty string is a valid value and still serializes (`alt=""`).
pub trait StringAttribute: Attribute + AsRef<str> {
    /// Wrap a raw string. Never fails.
    fn from_raw(value: String) -> Self;

    /// The wrapped value.
    fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Unwrap into the owned value.
    fn into_inner(self) -> String;

    /// Length of the value in bytes.
    fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether the value is the empty string.
    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// Canonical byte serialization of an attribute.
///
/// [`write_bytes`](Self::write_bytes) is the only place bytes are produced;
/// every string form here is decoded from those bytes. Object-safe, so
/// elements can keep heterogeneous attributes as `&dyn AttributeBytes`.
pub trait AttributeBytes: fmt::Debug {
    /// Wire name of the attribute.
    fn attribute_name(&self) -> &str;

    /// Value as text: the string value, `""` for a true boolean attribute,
    /// and `None` for a false one.
    fn attribute_value(&self) -> Option<&str>;

    /// Exact number of bytes [`write_bytes`](Self::write_bytes) appends.
    fn serialized_len(&self) -> usize;

    /// Append the serialized form to `out`.
    fn write_bytes(&self, out: &mut Vec<u8>);

    /// Serialized form in a buffer of exactly the right size.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        self.write_bytes(&mut out);
        out
    }

    /// Whether serialization produces any bytes. A false boolean attribute
    /// does not, and must be left out of markup along with its separator.
    fn is_emitted(&self) -> bool {
        self.serialized_len() > 0
    }

    /// Decode the serialized bytes under `encoding`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the bytes are not valid in `encoding`.
    fn to_markup(&self, encoding: TextEncoding) -> Result<String, DecodeError> {
        encoding.decode(&self.to_bytes())
    }

    /// Decode the serialized bytes as UTF-8, which they always are.
    fn to_markup_string(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }
}

impl<T: AttributeBytes + ?Sized> AttributeBytes for &T {
    fn attribute_name(&self) -> &str {
        (**self).attribute_name()
    }

    fn attribute_value(&self) -> Option<&str> {
        (**self).attribute_value()
    }

    fn serialized_len(&self) -> usize {
        (**self).serialized_len()
    }

    fn write_bytes(&self, out: &mut Vec<u8>) {
        (**self).write_bytes(out);
    }
}
