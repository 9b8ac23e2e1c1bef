//! Text encodings for decoding serialized attribute bytes.

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::DecodeError;

/// An encoding under which serialized bytes can be re-read as text.
///
/// Serialization always produces UTF-8. Decoding under another encoding is
/// a plain re-interpretation of the same bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TextEncoding {
    /// [Encoding Standard § 10.1 UTF-8](https://encoding.spec.whatwg.org/#utf-8)
    #[default]
    #[strum(to_string = "utf-8", serialize = "utf8")]
    Utf8,
    /// 7-bit US-ASCII. Bytes above 0x7F are rejected.
    #[strum(to_string = "ascii", serialize = "us-ascii")]
    Ascii,
    /// ISO-8859-1: each byte is the code point of the same value.
    #[strum(to_string = "latin1", serialize = "iso-8859-1")]
    Latin1,
}

impl TextEncoding {
    /// Decode `bytes` as text in this encoding.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidUtf8`] for malformed UTF-8, and
    /// [`DecodeError::NonAscii`] for bytes above 0x7F under ASCII. Latin-1
    /// decoding never fails.
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|err| DecodeError::InvalidUtf8 {
                    valid_up_to: err.valid_up_to(),
                }),
            Self::Ascii => match bytes.iter().position(|byte| !byte.is_ascii()) {
                Some(offset) => Err(DecodeError::NonAscii {
                    offset,
                    byte: bytes[offset],
                }),
                None => Ok(bytes.iter().copied().map(char::from).collect()),
            },
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_names() {
        assert_eq!("UTF-8".parse::<TextEncoding>(), Ok(TextEncoding::Utf8));
        assert_eq!("latin1".parse::<TextEncoding>(), Ok(TextEncoding::Latin1));
        assert_eq!("iso-8859-1".parse::<TextEncoding>(), Ok(TextEncoding::Latin1));
        assert!("ebcdic".parse::<TextEncoding>().is_err());
        assert_eq!(TextEncoding::Utf8.to_string(), "utf-8");
    }

    #[test]
    fn test_display_name_parses_back() {
        for encoding in TextEncoding::iter() {
            assert_eq!(encoding.to_string().parse::<TextEncoding>(), Ok(encoding));
        }
    }

    #[test]
    fn test_decode_ascii() {
        assert_eq!(TextEncoding::Ascii.decode(b"hidden"), Ok("hidden".to_string()));
        assert_eq!(
            TextEncoding::Ascii.decode("a=\"é\"".as_bytes()),
            Err(DecodeError::NonAscii {
                offset: 3,
                byte: 0xc3
            })
        );
    }

    #[test]
    fn test_decode_utf8_rejects_truncated_sequence() {
        let bytes = [b'i', b'd', 0xe6, 0x97];
        assert_eq!(
            TextEncoding::Utf8.decode(&bytes),
            Err(DecodeError::InvalidUtf8 { valid_up_to: 2 })
        );
    }

    #[test]
    fn test_decode_latin1_is_total() {
        let decoded = TextEncoding::Latin1.decode(&[0x63, 0x61, 0x66, 0xe9]).unwrap();
        assert_eq!(decoded, "café");
    }
}
