//! Bencode serialization.
//!
//! This module provides two serde serializers:
//!
//! - [`Serializer`] writes canonical bencode bytes to any [`io::Write`] sink
//! - [`ValueSerializer`] builds a [`Value`] tree in memory
//!
//! ## Data model mapping
//!
//! | Rust / serde                     | Bencode                                   |
//! |----------------------------------|-------------------------------------------|
//! | integers (`i8`..`u128`)          | integer                                   |
//! | `str`, `char`, bytes             | byte string                               |
//! | `Some(v)`, newtype structs       | the inner value                           |
//! | sequences, tuples                | list                                      |
//! | maps, structs                    | dictionary, keys sorted by raw bytes      |
//! | unit variant                     | byte string holding the variant name      |
//! | other enum variants              | single-entry dictionary `{variant: data}` |
//! | `bool`, floats, `()`, `None`     | rejected with [`Error::UnsupportedType`]  |
//!
//! Map keys must serialize to byte strings. Two keys that serialize to the
//! same bytes are rejected with [`Error::DuplicateKey`].
//!
//! ## Usage
//!
//! ```rust
//! use serde_bencode::{to_bytes, Serializer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct File { name: String, length: u64 }
//!
//! let file = File { name: "a.txt".to_string(), length: 12 };
//! assert_eq!(to_bytes(&file).unwrap(), b"d6:lengthi12e4:name5:a.txte");
//!
//! let mut serializer = Serializer::new(Vec::new());
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), b"li1ei2ei3ee");
//! ```

use crate::encode::{write_bytes, write_integer};
use crate::value::BIGINT_TOKEN;
use crate::{BencodeMap, ByteString, Error, Result, Value};
use num_bigint::BigInt;
use serde::ser::Serializer as _;
use serde::{ser, Serialize};
use std::io;

/// The bencode serializer.
///
/// Scalars and sequences are written as they arrive. Maps and structs are
/// buffered until their end so the keys can be sorted.
pub struct Serializer<W> {
    writer: W,
}

impl<W: io::Write> Serializer<W> {
    pub fn new(writer: W) -> Self {
        Serializer { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }
}

impl<'a, W: io::Write> ser::Serializer for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a, W>;
    type SerializeTuple = SeqSerializer<'a, W>;
    type SerializeTupleStruct = SeqSerializer<'a, W>;
    type SerializeTupleVariant = SeqSerializer<'a, W>;
    type SerializeMap = MapSerializer<'a, W>;
    type SerializeStruct = MapSerializer<'a, W>;
    type SerializeStructVariant = MapSerializer<'a, W>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(Error::unsupported_type("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        write_integer(&mut self.writer, v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        write_integer(&mut self.writer, v)
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        write_integer(&mut self.writer, v)
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        write_integer(&mut self.writer, v)
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(Error::unsupported_type("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(Error::unsupported_type("f64"))
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        write_bytes(&mut self.writer, v.as_bytes())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        write_bytes(&mut self.writer, v)
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::unsupported_type("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Err(Error::unsupported_type("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<()> {
        Err(Error::unsupported_type(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if name == BIGINT_TOKEN {
            let i = bigint_from_token(value)?;
            return write_integer(&mut self.writer, i);
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.write_raw(b"d")?;
        write_bytes(&mut self.writer, variant.as_bytes())?;
        value.serialize(&mut *self)?;
        self.write_raw(b"e")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.write_raw(b"l")?;
        Ok(SeqSerializer {
            ser: self,
            variant: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.write_raw(b"d")?;
        write_bytes(&mut self.writer, variant.as_bytes())?;
        self.write_raw(b"l")?;
        Ok(SeqSerializer {
            ser: self,
            variant: true,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            entries: EntryBuffer::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(MapSerializer {
            ser: self,
            entries: EntryBuffer::with_capacity(len),
            variant: Some(variant),
        })
    }
}

/// Streams list elements; tuple variants also close their wrapping dictionary.
pub struct SeqSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
    variant: bool,
}

impl<'a, W: io::Write> SeqSerializer<'a, W> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        if self.variant {
            self.ser.write_raw(b"ee")
        } else {
            self.ser.write_raw(b"e")
        }
    }
}

impl<'a, W: io::Write> ser::SerializeSeq for SeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a, W: io::Write> ser::SerializeTuple for SeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a, W: io::Write> ser::SerializeTupleStruct for SeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a, W: io::Write> ser::SerializeTupleVariant for SeqSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Dictionary entries collected before they are written in key order.
struct EntryBuffer {
    map: BencodeMap,
    current_key: Option<ByteString>,
}

impl EntryBuffer {
    fn with_capacity(capacity: usize) -> Self {
        EntryBuffer {
            map: BencodeMap::with_capacity(capacity),
            current_key: None,
        }
    }

    fn key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::Bytes(key) => {
                self.current_key = Some(key);
                Ok(())
            }
            other => Err(Error::unsupported_type(&format!(
                "dictionary key must be a byte string, found {}",
                other.kind()
            ))),
        }
    }

    fn value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.insert(key, to_value(value)?)
    }

    fn field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(ByteString::from(key), to_value(value)?)
    }

    fn insert(&mut self, key: ByteString, value: Value) -> Result<()> {
        if self.map.contains_key(&key) {
            return Err(Error::duplicate_key(key.as_bytes(), None));
        }
        self.map.insert(key, value);
        Ok(())
    }
}

/// Buffers dictionary entries and writes them sorted on `end`.
pub struct MapSerializer<'a, W> {
    ser: &'a mut Serializer<W>,
    entries: EntryBuffer,
    variant: Option<&'static str>,
}

impl<'a, W: io::Write> MapSerializer<'a, W> {
    fn finish(self) -> Result<()> {
        let writer = &mut self.ser.writer;
        if let Some(variant) = self.variant {
            writer.write_all(b"d")?;
            write_bytes(writer, variant.as_bytes())?;
        }
        crate::encode::write_value(writer, &Value::Dict(self.entries.map))?;
        if self.variant.is_some() {
            writer.write_all(b"e")?;
        }
        Ok(())
    }
}

impl<'a, W: io::Write> ser::SerializeMap for MapSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.key(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.value(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a, W: io::Write> ser::SerializeStruct for MapSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a, W: io::Write> ser::SerializeStructVariant for MapSerializer<'a, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Serializer whose output is a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    entries: EntryBuffer,
    variant: Option<&'static str>,
}

/// Wraps variant data in the single-entry dictionary that names the variant.
fn wrap_variant(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => {
            let mut map = BencodeMap::with_capacity(1);
            map.insert(name, value);
            Value::Dict(map)
        }
        None => value,
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, _v: bool) -> Result<Value> {
        Err(Error::unsupported_type("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, _v: f32) -> Result<Value> {
        Err(Error::unsupported_type("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Value> {
        Err(Error::unsupported_type("f64"))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(Error::unsupported_type(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        if name == BIGINT_TOKEN {
            return bigint_from_token(value).map(Value::Integer);
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(Some(variant), to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len),
            variant: Some(variant),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: EntryBuffer::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: EntryBuffer::with_capacity(len),
            variant: Some(variant),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::List(self.vec)))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.key(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.value(value)
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Dict(self.entries.map)))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.field(key, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeMap::end(self)
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.field(key, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeMap::end(self)
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Recovers an integer carried through serde as decimal text.
fn bigint_from_token<T: Serialize + ?Sized>(value: &T) -> Result<BigInt> {
    match to_value(value)? {
        Value::Integer(i) => Ok(i),
        Value::Bytes(digits) => digits
            .as_str()
            .and_then(|s| s.parse::<BigInt>().ok())
            .ok_or_else(|| Error::custom(format!("invalid integer text {:?}", digits))),
        other => Err(Error::custom(format!(
            "expected integer text, found {}",
            other.kind()
        ))),
    }
}
