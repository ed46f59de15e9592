//! Canonical bencode encoding of [`Value`] trees.
//!
//! The output is deterministic: dictionary keys are written in ascending
//! raw-byte order regardless of the order they were inserted, integers are
//! written in minimal decimal form, and nothing else varies. Two equal values
//! always produce identical bytes.
//!
//! ```rust
//! use serde_bencode::{encode, BencodeMap, Value};
//!
//! let mut dict = BencodeMap::new();
//! dict.insert("spam", Value::from("eggs"));
//! dict.insert("cow", Value::from("moo"));
//!
//! assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"d3:cow3:moo4:spam4:eggse");
//! ```

use crate::{Result, Value};
use std::fmt::Display;
use std::io::Write;

/// Encodes a value to a byte vector.
///
/// # Errors
///
/// Every [`Value`] is encodable, so this only fails if the output buffer
/// cannot grow.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{encode, Value};
///
/// assert_eq!(encode(&Value::from(42)).unwrap(), b"i42e");
/// assert_eq!(encode(&Value::from("spam")).unwrap(), b"4:spam");
///
/// let list = Value::List(vec![Value::from(1), Value::from("two")]);
/// assert_eq!(encode(&list).unwrap(), b"li1e3:twoe");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

/// Encodes a value into a writer.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
pub fn encode_to_writer<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    write_value(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_value<W: Write + ?Sized>(writer: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Bytes(b) => write_bytes(writer, b.as_bytes()),
        Value::Integer(i) => write_integer(writer, i),
        Value::List(list) => {
            writer.write_all(b"l")?;
            for item in list {
                write_value(writer, item)?;
            }
            writer.write_all(b"e")?;
            Ok(())
        }
        Value::Dict(map) => {
            writer.write_all(b"d")?;
            for (key, val) in map.sorted() {
                write_bytes(writer, key.as_bytes())?;
                write_value(writer, val)?;
            }
            writer.write_all(b"e")?;
            Ok(())
        }
    }
}

pub(crate) fn write_bytes<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}

pub(crate) fn write_integer<W: Write + ?Sized, I: Display>(writer: &mut W, i: I) -> Result<()> {
    write!(writer, "i{}e", i)?;
    Ok(())
}
