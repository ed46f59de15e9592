//! # serde_bencode
//!
//! A Serde-compatible codec for bencode, the serialization format used by
//! BitTorrent metainfo files and tracker responses.
//!
//! ## What is bencode?
//!
//! Bencode has four kinds of element:
//!
//! | Kind        | Wire form                 | Example                 |
//! |-------------|---------------------------|-------------------------|
//! | byte string | `<length>:<bytes>`        | `4:spam`                |
//! | integer     | `i<decimal>e`             | `i-42e`                 |
//! | list        | `l<elements>e`            | `l4:spami42ee`          |
//! | dictionary  | `d<key><value>...e`       | `d3:cow3:mooe`          |
//!
//! Every encoded value has exactly one canonical byte form: dictionary keys are
//! sorted by their raw bytes and integers carry no leading zeros. That property
//! is what makes a torrent's info-hash stable.
//!
//! ## Key Features
//!
//! - **Byte-exact**: strings are raw bytes; nothing is assumed to be UTF-8
//! - **Unbounded integers**: the value model stores integers as `BigInt`
//! - **Canonical output**: the encoder always sorts dictionary keys
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//! - **Precise errors**: every malformed input maps to its own error variant
//!   with a byte offset
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_bencode::{from_bytes, to_bytes};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Peer {
//!     ip: String,
//!     port: u16,
//! }
//!
//! let peer = Peer { ip: "10.0.0.1".to_string(), port: 6881 };
//!
//! let bytes = to_bytes(&peer).unwrap();
//! assert_eq!(bytes, b"d2:ip8:10.0.0.14:porti6881ee");
//!
//! let back: Peer = from_bytes(&bytes).unwrap();
//! assert_eq!(peer, back);
//! ```
//!
//! ### Dynamic Values
//!
//! ```rust
//! use serde_bencode::{bencode, decode, encode, Value};
//!
//! let value = bencode!({
//!     "spam": "eggs",
//!     "cow": "moo"
//! });
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, b"d3:cow3:moo4:spam4:eggse");
//!
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(decoded.get("cow").and_then(Value::as_str), Some("moo"));
//! ```
//!
//! ## Unsupported types
//!
//! Bencode has no booleans, floats, or null. Serializing `bool`, `f32`,
//! `f64`, `()` or `None` fails with [`Error::UnsupportedType`] instead of
//! silently picking a representation. Optional struct fields should use
//! `#[serde(skip_serializing_if = "Option::is_none")]`.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for top-level calls and decode
//! failures, `trace` for every decoded container. No subscriber is installed.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serializing and deserializing a struct
//! - **`metainfo.rs`** - reading a torrent-style metainfo file
//! - **`dynamic_values.rs`** - working with [`Value`] trees
//!
//! Run any example with: `cargo run --example <name>`

pub mod byte_string;
pub mod de;
pub mod encode;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod read;
pub mod ser;
pub mod value;

pub use byte_string::{ByteString, TextEncoding};
pub use de::{Deserializer, ValueDeserializer};
pub use encode::{encode, encode_to_writer};
pub use error::{Error, Result};
pub use map::BencodeMap;
pub use options::{DecodeOptions, DuplicateKeys, KeyOrder};
pub use read::{IoRead, SliceRead};
pub use ser::{Serializer, ValueSerializer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Decodes a complete bencode document into a [`Value`].
///
/// The whole slice must hold exactly one element.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{decode, Error, Value};
///
/// let value = decode(b"l4:spami42ee").unwrap();
/// assert_eq!(value, Value::List(vec![Value::from("spam"), Value::from(42)]));
///
/// assert!(matches!(decode(b"i1ei2e"), Err(Error::TrailingData { position: 3 })));
/// ```
///
/// # Errors
///
/// Returns the [`Error`] describing the first violation found.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &[u8]) -> Result<Value> {
    decode_with_options(input, DecodeOptions::default())
}

/// Decodes a complete bencode document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{decode_with_options, DecodeOptions, Error};
///
/// let options = DecodeOptions::new().with_max_depth(1);
/// assert!(decode_with_options(b"li1ee", options.clone()).is_ok());
/// assert!(matches!(
///     decode_with_options(b"lli1eee", options),
///     Err(Error::DepthLimitExceeded { .. })
/// ));
/// ```
///
/// # Errors
///
/// Returns the [`Error`] describing the first violation found.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(input: &[u8], options: DecodeOptions) -> Result<Value> {
    tracing::debug!(len = input.len(), "decoding bencode slice");
    let mut de = Deserializer::from_slice(input).with_options(options);
    let value = de.parse_value().and_then(|value| de.end().map(|()| value));
    if let Err(ref err) = value {
        tracing::debug!(error = %err, "bencode decode failed");
    }
    value
}

/// Decodes exactly one element from a byte stream.
///
/// Bytes after the element are left in the stream.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::decode_reader;
/// use std::io::Read;
///
/// let mut stream: &[u8] = b"i7erest";
/// let value = decode_reader(&mut stream).unwrap();
/// assert_eq!(value.as_i64(), Some(7));
///
/// let mut rest = String::new();
/// stream.read_to_string(&mut rest).unwrap();
/// assert_eq!(rest, "rest");
/// ```
///
/// # Errors
///
/// Returns the [`Error`] describing the first violation found, or
/// [`Error::Io`] if the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_reader<R: io::Read>(reader: R) -> Result<Value> {
    tracing::debug!("decoding bencode stream");
    let value = Deserializer::from_reader(reader).parse_value();
    if let Err(ref err) = value {
        tracing::debug!(error = %err, "bencode decode failed");
    }
    value
}

/// Serializes any `T: Serialize` to canonical bencode bytes.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::to_bytes;
/// use std::collections::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert("spam", "eggs");
/// map.insert("cow", "moo");
/// assert_eq!(to_bytes(&map).unwrap(), b"d3:cow3:moo4:spam4:eggse");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for kinds bencode cannot represent and
/// [`Error::DuplicateKey`] if two map keys serialize to the same bytes.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(Vec::with_capacity(128));
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serializes any `T: Serialize` to a writer as canonical bencode.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, b"l1:a1:be");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(writer);
    value.serialize(&mut serializer)?;
    let mut writer = serializer.into_inner();
    writer.flush()?;
    Ok(())
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.get("y").and_then(Value::as_i64), Some(2));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in bencode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserializes an instance of `T` from bencode bytes.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::from_bytes;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_bytes(b"d1:xi1e1:yi2ee").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid bencode, holds trailing bytes,
/// or does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_bytes<T>(input: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut de = Deserializer::from_slice(input);
    let value = T::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Deserializes an instance of `T` from one element of a byte stream.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"l1:a1:be".to_vec());
/// let letters: Vec<String> = from_reader(cursor).unwrap();
/// assert_eq!(letters, vec!["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid bencode, or it
/// does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut de = Deserializer::from_reader(reader);
    T::deserialize(&mut de)
}

/// Deserializes an instance of `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{bencode, from_value};
///
/// let pair: (String, u32) = from_value(bencode!(["spam", 3])).unwrap();
/// assert_eq!(pair, ("spam".to_string(), 3));
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        tags: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nickname: Option<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: -2 };
        let bytes = to_bytes(&point).unwrap();
        assert_eq!(bytes, b"d1:xi1e1:yi-2ee");
        let point_back: Point = from_bytes(&bytes).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            tags: vec!["admin".to_string(), "user".to_string()],
            nickname: None,
        };

        let bytes = to_bytes(&user).unwrap();
        assert_eq!(
            bytes,
            b"d2:idi123e4:name5:Alice4:tagsl5:admin4:useree".to_vec()
        );
        let user_back: User = from_bytes(&bytes).unwrap();
        assert_eq!(user, user_back);

        let with_nick = User {
            nickname: Some("al".to_string()),
            ..user
        };
        let back: User = from_bytes(&to_bytes(&with_nick).unwrap()).unwrap();
        assert_eq!(back.nickname.as_deref(), Some("al"));
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        match value {
            Value::Dict(map) => {
                assert_eq!(map.get("x"), Some(&Value::from(1)));
                assert_eq!(map.get("y"), Some(&Value::from(2)));
            }
            other => panic!("expected dictionary, got {:?}", other),
        }
    }

    #[test]
    fn test_canonical_examples() {
        assert_eq!(decode(b"0:").unwrap(), Value::from(""));
        assert_eq!(encode(&Value::from("")).unwrap(), b"0:");

        let huge: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
        let value = decode(b"i123456789012345678901234567890123456789e").unwrap();
        assert_eq!(value, Value::Integer(huge));

        let mut map = BencodeMap::new();
        map.insert("spam", Value::from("eggs"));
        map.insert("cow", Value::from("moo"));
        let bytes = encode(&Value::Dict(map.clone())).unwrap();
        assert_eq!(bytes, b"d3:cow3:moo4:spam4:eggse");
        assert_eq!(decode(&bytes).unwrap(), Value::Dict(map));
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(decode(b""), Err(Error::UnexpectedEndOfInput { position: 0 })));
        assert!(matches!(decode(b"i03e"), Err(Error::InvalidIntegerLiteral { .. })));
        assert!(matches!(decode(b"i-0e"), Err(Error::InvalidIntegerLiteral { .. })));
        assert!(matches!(decode(b"4spam"), Err(Error::InvalidStringLength { .. })));
        assert!(matches!(decode(b"10:abcde"), Err(Error::TruncatedStringBody { .. })));
        assert!(matches!(decode(b"l4:spam"), Err(Error::UnterminatedList { .. })));
        assert!(matches!(
            decode(b"di123e4:valuee"),
            Err(Error::InvalidDictionaryKeyType { .. })
        ));
        assert!(matches!(
            decode(b"x4:spam"),
            Err(Error::UnrecognizedMarker { byte: b'x', .. })
        ));
    }

    #[test]
    fn test_from_bytes_rejects_trailing_data() {
        let result: Result<Point> = from_bytes(b"d1:xi1e1:yi2eeXX");
        assert!(matches!(result, Err(Error::TrailingData { position: 14 })));
    }

    #[test]
    fn test_decode_reader_leaves_rest() {
        let mut stream: &[u8] = b"li1eei2e";
        assert_eq!(
            decode_reader(&mut stream).unwrap(),
            Value::List(vec![Value::from(1)])
        );
        assert_eq!(stream, b"i2e");
        assert_eq!(decode_reader(&mut stream).unwrap(), Value::from(2));
    }

    #[test]
    fn test_writer_output_matches_bytes() {
        let points = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &points).unwrap();
        assert_eq!(buffer, to_bytes(&points).unwrap());
    }

    #[test]
    fn test_from_value() {
        let value = to_value(&Point { x: 5, y: 6 }).unwrap();
        let point: Point = from_value(value).unwrap();
        assert_eq!(point, Point { x: 5, y: 6 });
    }
}
