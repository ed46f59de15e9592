//! Owned byte strings.
//!
//! Bencode strings are raw bytes: torrent `pieces` fields hold SHA-1 digests,
//! and older clients wrote names in legacy code pages. [`ByteString`] keeps the
//! bytes exactly as they appeared on the wire and only produces text when asked
//! for it with an explicit [`TextEncoding`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_bencode::{ByteString, TextEncoding};
//!
//! let name = ByteString::new(b"caf\xe9");
//! assert_eq!(name.as_str(), None);
//! assert_eq!(name.text(TextEncoding::Latin1), "café");
//! assert_eq!(name.text(TextEncoding::Utf8), "caf\u{fffd}");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Character encodings understood by [`ByteString::text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8; invalid sequences become U+FFFD.
    #[default]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    Latin1,
    /// US-ASCII; bytes above 0x7F become U+FFFD.
    Ascii,
}

/// An immutable, owned sequence of bytes.
///
/// Ordering is byte-lexicographic, which is the order bencode requires for
/// dictionary keys.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Creates a byte string holding a copy of `bytes`.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        ByteString(bytes.to_vec())
    }

    /// Returns the bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns a copy of the bytes.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Consumes the byte string and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the bytes as `&str` if they are valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::ByteString;
    ///
    /// assert_eq!(ByteString::from("spam").as_str(), Some("spam"));
    /// assert_eq!(ByteString::new(&[0xff]).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Decodes the bytes as text in the given encoding.
    ///
    /// Bytes that cannot be represented are replaced with U+FFFD. The result
    /// borrows from `self` whenever no conversion is needed.
    #[must_use]
    pub fn text(&self, encoding: TextEncoding) -> Cow<'_, str> {
        match encoding {
            TextEncoding::Utf8 => String::from_utf8_lossy(&self.0),
            TextEncoding::Latin1 => {
                if self.0.is_ascii() {
                    String::from_utf8_lossy(&self.0)
                } else {
                    Cow::Owned(self.0.iter().map(|&b| char::from(b)).collect())
                }
            }
            TextEncoding::Ascii => {
                if self.0.is_ascii() {
                    String::from_utf8_lossy(&self.0)
                } else {
                    Cow::Owned(
                        self.0
                            .iter()
                            .map(|&b| {
                                if b.is_ascii() {
                                    char::from(b)
                                } else {
                                    char::REPLACEMENT_CHARACTER
                                }
                            })
                            .collect(),
                    )
                }
            }
        }
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "b{:?}", s),
            None => write!(f, "b\"{}\"", self.0.escape_ascii()),
        }
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text(TextEncoding::Utf8))
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        ByteString::new(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(bytes: &[u8; N]) -> Self {
        ByteString::new(bytes)
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        ByteString(bytes)
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        ByteString::new(s.as_bytes())
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        ByteString(s.into_bytes())
    }
}

impl From<ByteString> for Vec<u8> {
    fn from(s: ByteString) -> Self {
        s.0
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl Serialize for ByteString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ByteStringVisitor;

        impl<'de> Visitor<'de> for ByteStringVisitor {
            type Value = ByteString;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a byte string")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E> {
                Ok(ByteString::new(v))
            }

            fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E> {
                Ok(ByteString(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ByteString::from(v))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
                Ok(ByteString::from(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                Ok(ByteString(bytes))
            }
        }

        deserializer.deserialize_byte_buf(ByteStringVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_input() {
        let mut buffer = b"spam".to_vec();
        let s = ByteString::new(&buffer);
        buffer[0] = b'S';
        assert_eq!(s.as_bytes(), b"spam");

        let mut copy = s.to_vec();
        copy.clear();
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_byte_order() {
        let mut keys = vec![
            ByteString::from("spam"),
            ByteString::from("cow"),
            ByteString::new(&[0xff]),
            ByteString::from("Zebra"),
            ByteString::from(""),
        ];
        keys.sort();
        let sorted: Vec<&[u8]> = keys.iter().map(|k| k.as_bytes()).collect();
        assert_eq!(
            sorted,
            vec![&b""[..], &b"Zebra"[..], &b"cow"[..], &b"spam"[..], &[0xff][..]]
        );
    }

    #[test]
    fn test_text_projections() {
        let ascii = ByteString::from("plain");
        assert!(matches!(ascii.text(TextEncoding::Latin1), Cow::Borrowed("plain")));

        let mixed = ByteString::new(&[b'a', 0xe9, b'b']);
        assert_eq!(mixed.text(TextEncoding::Latin1), "a\u{e9}b");
        assert_eq!(mixed.text(TextEncoding::Ascii), "a\u{fffd}b");
        assert_eq!(mixed.text(TextEncoding::Utf8), "a\u{fffd}b");
    }

    #[test]
    fn test_debug_shows_text_or_escapes() {
        assert_eq!(format!("{:?}", ByteString::from("cow")), "b\"cow\"");
        assert_eq!(format!("{:?}", ByteString::new(&[0x00, 0xff])), "b\"\\x00\\xff\"");
    }
}
