//! Bencode Format Reference
//!
//! This module documents the bencode wire format as implemented by this
//! library, including the points where implementations in the wild disagree.
//!
//! # Overview
//!
//! Bencode is the serialization format of BitTorrent metainfo (`.torrent`)
//! files and tracker responses. It is self-delimiting: every element begins
//! with a marker byte that determines how far the element extends, so a
//! decoder never needs more than one byte of lookahead.
//!
//! # Grammar
//!
//! ```text
//! element    = byte-string / integer / list / dictionary
//! byte-string = length ":" *OCTET        ; exactly `length` octets
//! length     = 1*DIGIT                   ; decimal, no sign
//! integer    = "i" [ "-" ] digits "e"
//! digits     = "0" / ( %x31-39 *DIGIT )  ; no leading zeros
//! list       = "l" *element "e"
//! dictionary = "d" *( byte-string element ) "e"
//! ```
//!
//! ## Byte strings
//!
//! The length counts bytes, not characters. The body is copied verbatim and
//! may contain any byte, including `:` and `e`:
//!
//! ```rust
//! use serde_bencode::{decode, Value};
//!
//! assert_eq!(decode(b"4:spam").unwrap(), Value::from("spam"));
//! assert_eq!(decode(b"0:").unwrap(), Value::from(""));
//! assert_eq!(decode(b"3:e:e").unwrap(), Value::from("e:e"));
//! ```
//!
//! ## Integers
//!
//! Integers have no size limit. This library stores them as `BigInt`, so a
//! value wider than 64 bits decodes and re-encodes unchanged:
//!
//! ```rust
//! use serde_bencode::{decode, encode};
//!
//! let wide = b"i-98765432109876543210987654321e";
//! assert_eq!(encode(&decode(wide).unwrap()).unwrap(), wide.to_vec());
//! ```
//!
//! The literal must be canonical. `i03e` (leading zero), `i-0e` (negative
//! zero), `ie` (empty), `i+3e` (plus sign) and `i1.5e` (fraction) are all
//! rejected with [`Error::InvalidIntegerLiteral`](crate::Error::InvalidIntegerLiteral).
//!
//! ## Lists
//!
//! `l`, zero or more elements, `e`. Elements may be of mixed kinds.
//!
//! ## Dictionaries
//!
//! `d`, zero or more key/value pairs, `e`. Keys must be byte strings:
//!
//! ```rust
//! use serde_bencode::{decode, Error};
//!
//! assert!(matches!(
//!     decode(b"di1ei2ee"),
//!     Err(Error::InvalidDictionaryKeyType { found: "integer", .. })
//! ));
//! ```
//!
//! # Canonical Form
//!
//! The encoder writes exactly one byte sequence per value:
//!
//! - dictionary keys in ascending order of their raw bytes (not by UTF-8
//!   code point, not case-folded, not by locale)
//! - integers in minimal decimal form, `-` only for negative values
//! - string lengths in minimal decimal form
//!
//! The info-hash of a torrent is the SHA-1 of its canonically encoded `info`
//! dictionary, so any deviation changes the torrent's identity.
//!
//! ```rust
//! use serde_bencode::{bencode, encode};
//!
//! let value = bencode!({ "b": 1, "B": 2, "a": 3 });
//! assert_eq!(encode(&value).unwrap(), b"d1:Bi2e1:ai3e1:bi1ee");
//! ```
//!
//! # Decoder Leniency
//!
//! Real-world files are not always canonical. By default the decoder accepts:
//!
//! | Input                              | Default behavior                    | Strict option                      |
//! |------------------------------------|-------------------------------------|------------------------------------|
//! | Dictionary keys out of order       | accepted, wire order kept           | [`KeyOrder::Strict`] rejects       |
//! | Repeated dictionary key            | last value wins                     | [`DuplicateKeys::Reject`] rejects  |
//! | Leading zeros in a string length   | accepted (`04:spam`)                | always accepted                    |
//! | Deep nesting                       | unlimited                           | [`DecodeOptions::with_max_depth`]  |
//! | Very long declared string length   | honored while bytes keep arriving   | [`DecodeOptions::with_max_string_len`] |
//!
//! Integer literals are always validated strictly.
//!
//! [`KeyOrder::Strict`]: crate::KeyOrder::Strict
//! [`DuplicateKeys::Reject`]: crate::DuplicateKeys::Reject
//! [`DecodeOptions::with_max_depth`]: crate::DecodeOptions::with_max_depth
//! [`DecodeOptions::with_max_string_len`]: crate::DecodeOptions::with_max_string_len
//!
//! # Rust Type Mapping
//!
//! | Rust                                  | Bencode                                 |
//! |---------------------------------------|-----------------------------------------|
//! | `i8`..`i128`, `u8`..`u128`, `BigInt`* | integer                                 |
//! | `String`, `&str`, `char`              | byte string (UTF-8 bytes)               |
//! | [`ByteString`](crate::ByteString)     | byte string (raw bytes)                 |
//! | `Vec<T>`, tuples, arrays              | list                                    |
//! | structs, `HashMap`, `BTreeMap`        | dictionary                              |
//! | `Option<T>`                           | the inner value when `Some`             |
//! | unit enum variant                     | byte string holding the variant name    |
//! | data-carrying enum variant            | `{variant: data}`                       |
//!
//! \* through [`Value::Integer`](crate::Value::Integer).
//!
//! `Vec<u8>` follows serde's default and serializes as a list of integers. Use
//! [`ByteString`](crate::ByteString) for binary fields such as `pieces`:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_bencode::{from_bytes, to_bytes, ByteString};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Info {
//!     #[serde(rename = "piece length")]
//!     piece_length: u64,
//!     pieces: ByteString,
//! }
//!
//! let info = Info { piece_length: 16384, pieces: ByteString::new(&[0xde, 0xad]) };
//! let bytes = to_bytes(&info).unwrap();
//! assert_eq!(bytes, b"d12:piece lengthi16384e6:pieces2:\xde\xade".to_vec());
//! assert_eq!(from_bytes::<Info>(&bytes).unwrap(), info);
//! ```
//!
//! # Limitations
//!
//! - No booleans, floats or null: they fail with
//!   [`Error::UnsupportedType`](crate::Error::UnsupportedType)
//! - Map keys must serialize to byte strings
//! - A decode error aborts the whole call; there is no partial result or repair
