//! Typed HTML attributes for the Trellis HTML model.
//!
//! # Scope
//!
//! This crate implements:
//! - **Attribute disciplines** ([WHATWG § 2.3.2](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#boolean-attributes))
//!   - Boolean attributes: present or absent, never `name="true"`
//!   - String attributes: `name="value"`, the empty string included
//! - **Canonical serialization**
//!   - One byte writer per discipline, with exact pre-computed lengths
//!   - Re-decoding under UTF-8, ASCII, or Latin-1
//! - **An attribute catalogue**, one newtype per attribute, grouped by the
//!   section of the HTML standard that defines it
//! - **Runtime-named attributes** for `data-*` and other open-ended names
//!
//! # Not Yet Implemented
//!
//! - Escaping of `"` and `&` inside values
//! - Value validation beyond the numeric convenience constructors

#[macro_use]
mod macros;

/// Attribute traits: naming, value disciplines, byte serialization.
pub mod attribute;
/// Metadata, edit, list, and scripting attributes.
pub mod document;
/// Attributes of embedded content: images, media, frames.
pub mod embedded;
/// Encodings for re-reading serialized bytes.
pub mod encoding;
/// Construction and decoding errors.
pub mod error;
/// Form control attributes.
pub mod form;
/// Global attributes.
pub mod global;
/// Hyperlink and resource-link attributes.
pub mod hyperlink;
/// Attributes with runtime names.
pub mod raw;
/// Byte writers shared by every attribute.
pub mod serialize;
/// Table attributes.
pub mod table;

pub use attribute::{Attribute, AttributeBytes, BooleanAttribute, StringAttribute};
pub use encoding::TextEncoding;
pub use error::{AttributeError, DecodeError};
pub use raw::RawAttribute;
pub use serialize::{serialize_boolean, serialize_string};

/// The attribute traits, for glob import.
pub mod prelude {
    pub use crate::attribute::{Attribute, AttributeBytes, BooleanAttribute, StringAttribute};
}
