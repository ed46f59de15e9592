//! Error types for bencode encoding and decoding.
//!
//! Every failure the codec can report is a distinct variant of [`Error`], so
//! callers can tell a truncated string apart from a malformed integer or a
//! non-string dictionary key without parsing messages.
//!
//! ## Error Categories
//!
//! - **Grammar errors**: the input violates the bencode grammar (bad marker,
//!   bad length prefix, bad integer literal, missing end marker, bad key type)
//! - **Policy errors**: the input is well formed but rejected by the configured
//!   [`DecodeOptions`](crate::DecodeOptions) (duplicate or unsorted keys,
//!   nesting or length ceilings)
//! - **Encoding errors**: a value kind that bencode cannot represent
//! - **I/O errors**: the underlying byte source or sink failed
//!
//! Decode errors carry the byte offset at which the problem was detected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bencode::{decode, Error};
//!
//! match decode(b"i03e") {
//!     Err(Error::InvalidIntegerLiteral { literal, position }) => {
//!         assert_eq!(literal, "03");
//!         assert_eq!(position, 1);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur during bencode encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input ended where an element (or part of one) was expected.
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEndOfInput { position: usize },

    /// The byte at the start of an element is not `i`, `l`, `d` or a digit.
    #[error("unrecognized marker byte 0x{byte:02x} at byte {position}")]
    UnrecognizedMarker { byte: u8, position: usize },

    /// The length prefix of a byte string is not a plain decimal number.
    #[error("invalid string length {literal:?} at byte {position}")]
    InvalidStringLength { literal: String, position: usize },

    /// A byte string declares more bytes than the input holds.
    #[error(
        "byte string at byte {position} declares {declared} bytes but only {available} are available"
    )]
    TruncatedStringBody {
        declared: usize,
        available: usize,
        position: usize,
    },

    /// The literal between `i` and `e` is not a canonical decimal integer.
    #[error("invalid integer literal {literal:?} at byte {position}")]
    InvalidIntegerLiteral { literal: String, position: usize },

    /// A list opened at `position` has no end marker.
    #[error("list starting at byte {position} is missing its end marker")]
    UnterminatedList { position: usize },

    /// A dictionary opened at `position` has no end marker.
    #[error("dictionary starting at byte {position} is missing its end marker")]
    UnterminatedDictionary { position: usize },

    /// A dictionary key decoded to something other than a byte string.
    #[error("dictionary key at byte {position} is {found}, expected a byte string")]
    InvalidDictionaryKeyType {
        found: &'static str,
        position: usize,
    },

    /// The same dictionary key appeared twice.
    #[error("duplicate dictionary key {key:?}{}", fmt_position(.position))]
    DuplicateKey {
        key: String,
        position: Option<usize>,
    },

    /// A dictionary key is not strictly greater than the key before it.
    #[error("dictionary key {key:?} at byte {position} is out of order")]
    UnsortedKey { key: String, position: usize },

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at byte {position}")]
    DepthLimitExceeded { limit: usize, position: usize },

    /// A byte string declares a length above the configured limit.
    #[error("byte string at byte {position} declares {declared} bytes, limit is {limit}")]
    StringTooLong {
        declared: usize,
        limit: usize,
        position: usize,
    },

    /// Bytes remain after the top-level element.
    #[error("trailing data after the top-level element at byte {position}")]
    TrailingData { position: usize },

    /// The value kind cannot be represented in bencode.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error from the byte source or sink
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through serde
    #[error("{0}")]
    Custom(String),
}

fn fmt_position(position: &Option<usize>) -> String {
    position
        .map(|p| format!(" at byte {}", p))
        .unwrap_or_default()
}

impl Error {
    /// Creates an invalid integer literal error from the raw literal bytes.
    ///
    /// Non-ASCII bytes in the literal are shown with replacement characters.
    pub fn invalid_integer(literal: &[u8], position: usize) -> Self {
        Error::InvalidIntegerLiteral {
            literal: String::from_utf8_lossy(literal).into_owned(),
            position,
        }
    }

    /// Creates an invalid string length error from the raw prefix bytes.
    pub fn invalid_length(literal: &[u8], position: usize) -> Self {
        Error::InvalidStringLength {
            literal: String::from_utf8_lossy(literal).into_owned(),
            position,
        }
    }

    /// Creates a duplicate key error.
    ///
    /// `position` is `None` when the duplicate was produced while encoding.
    pub fn duplicate_key(key: &[u8], position: Option<usize>) -> Self {
        Error::DuplicateKey {
            key: String::from_utf8_lossy(key).into_owned(),
            position,
        }
    }

    /// Creates an unsupported type error for values that bencode cannot represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::Error;
    ///
    /// let err = Error::unsupported_type("f64");
    /// assert_eq!(err.to_string(), "unsupported type: f64");
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for byte source or sink failures.
    pub fn io(err: &io::Error) -> Self {
        Error::Io(err.to_string())
    }

    /// Returns the byte offset at which a decode error was detected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::decode;
    ///
    /// let err = decode(b"l4:spam").unwrap_err();
    /// assert_eq!(err.position(), Some(0));
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedEndOfInput { position }
            | Error::UnrecognizedMarker { position, .. }
            | Error::InvalidStringLength { position, .. }
            | Error::TruncatedStringBody { position, .. }
            | Error::InvalidIntegerLiteral { position, .. }
            | Error::UnterminatedList { position }
            | Error::UnterminatedDictionary { position }
            | Error::InvalidDictionaryKeyType { position, .. }
            | Error::UnsortedKey { position, .. }
            | Error::DepthLimitExceeded { position, .. }
            | Error::StringTooLong { position, .. }
            | Error::TrailingData { position } => Some(*position),
            Error::DuplicateKey { position, .. } => *position,
            Error::UnsupportedType(_) | Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// Returns `true` if the input ended before a complete element was read.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEndOfInput { .. }
                | Error::TruncatedStringBody { .. }
                | Error::UnterminatedList { .. }
                | Error::UnterminatedDictionary { .. }
        )
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(&err)
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
