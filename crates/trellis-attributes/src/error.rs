//! Error types for attribute construction and decoding.
//!
//! Range-constrained convenience constructors come in pairs: `from_int`
//! panics on a value outside the documented range, `try_from_int` returns
//! [`AttributeError`]. Serialization itself never fails.

use thiserror::Error;

/// A value rejected by a typed convenience constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// Integer outside the range the attribute allows.
    #[error("`{attribute}` must be in {min}..={max}, got {value}")]
    OutOfRange {
        /// Attribute name.
        attribute: &'static str,
        /// Rejected value.
        value: i64,
        /// Smallest allowed value.
        min: i64,
        /// Largest allowed value.
        max: i64,
    },

    /// Floating-point value that is NaN or infinite.
    #[error("`{attribute}` must be a finite number, got {value}")]
    NotFinite {
        /// Attribute name.
        attribute: &'static str,
        /// Rejected value, as formatted by Rust.
        value: String,
    },
}

/// Bytes that are not valid text in the requested encoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Not well-formed UTF-8.
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },

    /// A byte above 0x7F under the ASCII encoding.
    #[error("byte 0x{byte:02x} at offset {offset} is not ASCII")]
    NonAscii {
        /// Offset of the first offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
}

/// Check that `value` lies in `min..=max` for `attribute`.
pub(crate) fn check_range(
    attribute: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, AttributeError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AttributeError::OutOfRange {
            attribute,
            value,
            min,
            max,
        })
    }
}

/// Check that `value` is finite for `attribute`.
pub(crate) fn check_finite(attribute: &'static str, value: f64) -> Result<f64, AttributeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AttributeError::NotFinite {
            attribute,
            value: value.to_string(),
        })
    }
}

/// Unwrap a convenience-constructor result, treating an invalid value as a
/// programmer error.
#[track_caller]
pub(crate) fn expect_valid<T>(result: Result<T, AttributeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = check_range("size", 9, 1, 7).unwrap_err();
        assert_eq!(err.to_string(), "`size` must be in 1..=7, got 9");
    }

    #[test]
    fn test_not_finite_message() {
        let err = check_finite("max", f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "`max` must be a finite number, got NaN");
    }

    #[test]
    fn test_non_ascii_message() {
        let err = DecodeError::NonAscii {
            offset: 4,
            byte: 0xe6,
        };
        assert_eq!(err.to_string(), "byte 0xe6 at offset 4 is not ASCII");
    }
}
