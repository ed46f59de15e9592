//! Bencode deserialization.
//!
//! This module provides the [`Deserializer`], a recursive-descent parser that
//! turns a byte source into a [`Value`] tree, and the serde glue that maps
//! that tree onto any `Deserialize` type.
//!
//! ## Overview
//!
//! - **Marker dispatch**: one byte of lookahead picks the element kind
//!   (`i`, `l`, `d`, or a digit starting a string length)
//! - **Precise errors**: each grammar violation has its own [`Error`] variant
//!   carrying the byte offset
//! - **Build then freeze**: lists and dictionaries are accumulated locally and
//!   moved into the returned value
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use serde_bencode::{decode, from_bytes, Value};
//! use serde::Deserialize;
//!
//! let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
//! assert_eq!(value.get("cow").and_then(Value::as_str), Some("moo"));
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Pair { cow: String, spam: String }
//!
//! let pair: Pair = from_bytes(b"d3:cow3:moo4:spam4:eggse").unwrap();
//! assert_eq!(pair.spam, "eggs");
//! ```
//!
//! ## Reading from a stream
//!
//! ```rust
//! use serde_bencode::Deserializer;
//! use std::io::Cursor;
//!
//! let mut de = Deserializer::from_reader(Cursor::new(b"i1ei2e".to_vec()));
//! assert_eq!(de.parse_value().unwrap().as_i64(), Some(1));
//! assert_eq!(de.parse_value().unwrap().as_i64(), Some(2));
//! assert!(de.end().is_ok());
//! ```

use crate::options::{DecodeOptions, DuplicateKeys, KeyOrder};
use crate::read::{IoRead, Read, SliceRead};
use crate::{BencodeMap, ByteString, Error, Result, Value};
use num_bigint::BigInt;
use serde::de::{self, Deserializer as _, IntoDeserializer};
use serde::forward_to_deserialize_any;
use std::io;

/// The bencode deserializer.
///
/// Parses one element at a time from a [`Read`] source. Created via
/// [`Deserializer::from_slice`], [`Deserializer::from_reader`] or
/// [`Deserializer::new`].
pub struct Deserializer<R> {
    read: R,
    options: DecodeOptions,
    depth: usize,
}

impl<'a> Deserializer<SliceRead<'a>> {
    /// Creates a deserializer over an in-memory buffer.
    #[must_use]
    pub fn from_slice(input: &'a [u8]) -> Self {
        Deserializer::new(SliceRead::new(input))
    }
}

impl<R: io::Read> Deserializer<IoRead<R>> {
    /// Creates a deserializer over an I/O stream.
    pub fn from_reader(reader: R) -> Self {
        Deserializer::new(IoRead::new(reader))
    }
}

impl<R: Read> Deserializer<R> {
    pub fn new(read: R) -> Self {
        Deserializer {
            read,
            options: DecodeOptions::default(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.read.position()
    }

    pub fn into_inner(self) -> R {
        self.read
    }

    /// Checks that the source has no bytes left after the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrailingData`] if any byte remains.
    pub fn end(&mut self) -> Result<()> {
        match self.read.peek_byte()? {
            None => Ok(()),
            Some(_) => Err(Error::TrailingData {
                position: self.read.position(),
            }),
        }
    }

    /// Parses the next complete element.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] variant describing the first grammar or policy
    /// violation found. The source is left at an unspecified position.
    pub fn parse_value(&mut self) -> Result<Value> {
        let position = self.read.position();
        match self.read.peek_byte()? {
            Some(b'0'..=b'9') => self.parse_bytes().map(Value::Bytes),
            Some(b'i') => self.parse_integer().map(Value::Integer),
            Some(b'l') => self.parse_list().map(Value::List),
            Some(b'd') => self.parse_dict().map(Value::Dict),
            Some(byte) => Err(Error::UnrecognizedMarker { byte, position }),
            None => Err(Error::UnexpectedEndOfInput { position }),
        }
    }

    fn eof(&self) -> Error {
        Error::UnexpectedEndOfInput {
            position: self.read.position(),
        }
    }

    /// Reads the decimal length prefix and its `:` delimiter.
    fn parse_length(&mut self) -> Result<usize> {
        let position = self.read.position();
        let mut literal = Vec::new();
        loop {
            match self.read.next_byte()? {
                Some(b':') => break,
                Some(byte) if byte.is_ascii_digit() => literal.push(byte),
                Some(byte) => {
                    literal.push(byte);
                    return Err(Error::invalid_length(&literal, position));
                }
                None => return Err(self.eof()),
            }
        }

        std::str::from_utf8(&literal)
            .ok()
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| Error::invalid_length(&literal, position))
    }

    fn parse_bytes(&mut self) -> Result<ByteString> {
        let position = self.read.position();
        let declared = self.parse_length()?;

        if let Some(limit) = self.options.max_string_len {
            if declared > limit {
                return Err(Error::StringTooLong {
                    declared,
                    limit,
                    position,
                });
            }
        }

        let mut body = Vec::new();
        let available = self.read.read_bytes(declared, &mut body)?;
        if available < declared {
            return Err(Error::TruncatedStringBody {
                declared,
                available,
                position,
            });
        }

        Ok(ByteString::from(body))
    }

    fn parse_integer(&mut self) -> Result<BigInt> {
        self.read.next_byte()?; // 'i'
        let position = self.read.position();

        let mut literal = Vec::new();
        loop {
            match self.read.next_byte()? {
                Some(b'e') => break,
                Some(byte) => literal.push(byte),
                None => return Err(self.eof()),
            }
        }

        parse_integer_literal(&literal).ok_or_else(|| Error::invalid_integer(&literal, position))
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        match self.options.max_depth {
            Some(limit) if self.depth > limit => Err(Error::DepthLimitExceeded { limit, position }),
            _ => Ok(()),
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Value>> {
        let position = self.read.position();
        self.read.next_byte()?; // 'l'
        self.enter(position)?;

        let mut list = Vec::new();
        loop {
            match self.read.peek_byte()? {
                Some(b'e') => {
                    self.read.next_byte()?;
                    break;
                }
                Some(_) => list.push(self.parse_value()?),
                None => return Err(Error::UnterminatedList { position }),
            }
        }

        self.depth -= 1;
        tracing::trace!(position, len = list.len(), "decoded list");
        Ok(list)
    }

    fn parse_dict(&mut self) -> Result<BencodeMap> {
        let position = self.read.position();
        self.read.next_byte()?; // 'd'
        self.enter(position)?;

        let mut map = BencodeMap::new();
        let mut previous: Option<ByteString> = None;
        loop {
            match self.read.peek_byte()? {
                Some(b'e') => {
                    self.read.next_byte()?;
                    break;
                }
                Some(_) => {
                    let key_position = self.read.position();
                    let key = match self.parse_value()? {
                        Value::Bytes(key) => key,
                        other => {
                            return Err(Error::InvalidDictionaryKeyType {
                                found: other.kind(),
                                position: key_position,
                            })
                        }
                    };

                    if self.options.duplicate_keys == DuplicateKeys::Reject
                        && map.contains_key(&key)
                    {
                        return Err(Error::duplicate_key(key.as_bytes(), Some(key_position)));
                    }

                    if self.options.key_order == KeyOrder::Strict {
                        if let Some(prev) = &previous {
                            if key <= *prev {
                                return Err(Error::UnsortedKey {
                                    key: key.to_string(),
                                    position: key_position,
                                });
                            }
                        }
                        previous = Some(key.clone());
                    }

                    let value = self.parse_value()?;
                    map.insert(key, value);
                }
                None => return Err(Error::UnterminatedDictionary { position }),
            }
        }

        self.depth -= 1;
        tracing::trace!(position, len = map.len(), "decoded dictionary");
        Ok(map)
    }
}

/// Parses `-?[0-9]+` with no leading zeros and no negative zero.
fn parse_integer_literal(literal: &[u8]) -> Option<BigInt> {
    let digits = literal.strip_prefix(b"-").unwrap_or(literal);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if digits[0] == b'0' && literal.len() > 1 {
        return None;
    }
    BigInt::parse_bytes(literal, 10)
}

macro_rules! forward_to_value {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                ValueDeserializer::new(self.parse_value()?).$method(visitor)
            }
        )*
    };
}

impl<'de, R: Read> de::Deserializer<'de> for &mut Deserializer<R> {
    type Error = Error;

    forward_to_value! {
        deserialize_any deserialize_bool
        deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64 deserialize_i128
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64 deserialize_u128
        deserialize_f32 deserialize_f64 deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_option deserialize_unit
        deserialize_seq deserialize_map deserialize_identifier deserialize_ignored_any
    }

    fn deserialize_unit_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_value()?).deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_value()?).deserialize_newtype_struct(name, visitor)
    }

    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_value()?).deserialize_tuple(len, visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_value()?).deserialize_tuple_struct(name, len, visitor)
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_value()?).deserialize_struct(name, fields, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_value()?).deserialize_enum(name, variants, visitor)
    }
}

/// Deserializes a `Deserialize` type out of an already decoded [`Value`].
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}

fn visit_integer<'de, V>(i: BigInt, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    if let Ok(v) = i64::try_from(&i) {
        visitor.visit_i64(v)
    } else if let Ok(v) = u64::try_from(&i) {
        visitor.visit_u64(v)
    } else if let Ok(v) = i128::try_from(&i) {
        visitor.visit_i128(v)
    } else if let Ok(v) = u128::try_from(&i) {
        visitor.visit_u128(v)
    } else {
        let digits: de::value::StringDeserializer<Error> = i.to_string().into_deserializer();
        visitor.visit_newtype_struct(digits)
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Bytes(b) => visitor.visit_byte_buf(b.into_vec()),
            Value::Integer(i) => visit_integer(i, visitor),
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            Value::Dict(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Bytes(b) => match String::from_utf8(b.into_vec()) {
                Ok(s) => visitor.visit_string(s),
                Err(e) => visitor.visit_byte_buf(e.into_bytes()),
            },
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        // Absent keys are handled by serde; a present value is always `Some`.
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Bytes(variant) => visitor.visit_enum(EnumDeserializer {
                variant,
                value: None,
            }),
            Value::Dict(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, value)) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    None => Err(Error::custom("expected enum variant")),
                }
            }
            other => Err(Error::custom(format!(
                "expected enum as byte string or single-entry dictionary, found {}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<ByteString, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: BencodeMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::Bytes(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: ByteString,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::Bytes(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            None => Ok(()),
            Some(_) => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::List(list)) => visitor.visit_seq(SeqDeserializer::new(list)),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Dict(map)) => visitor.visit_map(MapDeserializer::new(map)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> Result<Value> {
        Deserializer::from_slice(input).parse_value()
    }

    #[test]
    fn test_byte_strings() {
        assert_eq!(parse(b"4:spam").unwrap(), Value::from("spam"));
        assert_eq!(parse(b"0:").unwrap(), Value::from(""));
        assert_eq!(
            parse(b"3:\x00\xff:").unwrap(),
            Value::from(vec![0x00u8, 0xff, b':'])
        );
    }

    #[test]
    fn test_length_prefix_errors() {
        assert!(matches!(
            parse(b"4spam"),
            Err(Error::InvalidStringLength { ref literal, position: 0 }) if literal == "4s"
        ));
        assert!(matches!(
            parse(b"4"),
            Err(Error::UnexpectedEndOfInput { position: 1 })
        ));
        assert!(matches!(
            parse(b"99999999999999999999999:x"),
            Err(Error::InvalidStringLength { .. })
        ));
        assert!(matches!(
            parse(b"10:abcde"),
            Err(Error::TruncatedStringBody {
                declared: 10,
                available: 5,
                position: 0
            })
        ));
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse(b"i0e").unwrap(), Value::from(0));
        assert_eq!(parse(b"i42e").unwrap(), Value::from(42));
        assert_eq!(parse(b"i-42e").unwrap(), Value::from(-42));

        let big = parse(b"i-170141183460469231731687303715884105729e").unwrap();
        let expected: BigInt = "-170141183460469231731687303715884105729".parse().unwrap();
        assert_eq!(big, Value::Integer(expected));
    }

    #[test]
    fn test_integer_literal_rules() {
        let rejected: [&[u8]; 9] = [b"", b"-", b"-0", b"03", b"-03", b"+3", b"1_000", b"4.2", b" 1"];
        for literal in rejected {
            assert_eq!(parse_integer_literal(literal), None, "{:?}", literal);
        }
        assert_eq!(parse_integer_literal(b"0"), Some(BigInt::from(0)));
        assert_eq!(parse_integer_literal(b"-10"), Some(BigInt::from(-10)));
    }

    #[test]
    fn test_integer_errors() {
        assert!(matches!(
            parse(b"i-0e"),
            Err(Error::InvalidIntegerLiteral { ref literal, position: 1 }) if literal == "-0"
        ));
        assert!(matches!(parse(b"ie"), Err(Error::InvalidIntegerLiteral { .. })));
        assert!(matches!(parse(b"i12"), Err(Error::UnexpectedEndOfInput { position: 3 })));
    }

    #[test]
    fn test_containers() {
        let list = parse(b"l4:spami42ee").unwrap();
        assert_eq!(
            list,
            Value::List(vec![Value::from("spam"), Value::from(42)])
        );

        let dict = parse(b"d3:cow3:moo4:spam4:eggse").unwrap();
        assert_eq!(dict.get("cow").and_then(Value::as_str), Some("moo"));
        assert_eq!(dict.get("spam").and_then(Value::as_str), Some("eggs"));

        assert_eq!(parse(b"le").unwrap(), Value::List(vec![]));
        assert_eq!(parse(b"de").unwrap(), Value::Dict(BencodeMap::new()));
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(parse(b"l4:spam"), Err(Error::UnterminatedList { position: 0 })));
        assert!(matches!(
            parse(b"d3:cow3:moo"),
            Err(Error::UnterminatedDictionary { position: 0 })
        ));
        assert!(matches!(
            parse(b"di123e4:valuee"),
            Err(Error::InvalidDictionaryKeyType {
                found: "integer",
                position: 1
            })
        ));
        assert!(matches!(
            parse(b"x4:spam"),
            Err(Error::UnrecognizedMarker { byte: b'x', position: 0 })
        ));
        assert!(matches!(parse(b""), Err(Error::UnexpectedEndOfInput { position: 0 })));
    }

    #[test]
    fn test_dictionary_keeps_wire_order() {
        let dict = parse(b"d4:spam4:eggs3:cow3:mooe").unwrap();
        let keys: Vec<String> = dict
            .as_dict()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["spam", "cow"]);
    }

    #[test]
    fn test_duplicate_keys_last_wins_by_default() {
        let dict = parse(b"d1:ai1e1:bi2e1:ai3ee").unwrap();
        let map = dict.as_dict().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").and_then(Value::as_i64), Some(3));
        assert_eq!(map.keys().next().map(|k| k.to_string()), Some("a".to_string()));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut de = Deserializer::from_slice(b"d1:ai1e1:ai3ee")
            .with_options(DecodeOptions::new().with_duplicate_keys(DuplicateKeys::Reject));
        assert!(matches!(
            de.parse_value(),
            Err(Error::DuplicateKey { ref key, position: Some(7) }) if key == "a"
        ));
    }

    #[test]
    fn test_strict_key_order() {
        let strict = DecodeOptions::new().with_key_order(KeyOrder::Strict);

        let mut de = Deserializer::from_slice(b"d1:ai1e1:bi2ee").with_options(strict.clone());
        assert!(de.parse_value().is_ok());

        let mut de = Deserializer::from_slice(b"d1:bi2e1:ai1ee").with_options(strict.clone());
        assert!(matches!(
            de.parse_value(),
            Err(Error::UnsortedKey { ref key, position: 7 }) if key == "a"
        ));

        // A repeated key is not strictly ascending either.
        let mut de = Deserializer::from_slice(b"d1:ai1e1:ai2ee").with_options(strict);
        assert!(matches!(de.parse_value(), Err(Error::UnsortedKey { .. })));
    }

    #[test]
    fn test_depth_limit() {
        let options = DecodeOptions::new().with_max_depth(2);

        let mut de = Deserializer::from_slice(b"llee").with_options(options.clone());
        assert!(de.parse_value().is_ok());

        let mut de = Deserializer::from_slice(b"lllee").with_options(options);
        assert!(matches!(
            de.parse_value(),
            Err(Error::DepthLimitExceeded { limit: 2, position: 2 })
        ));
    }

    #[test]
    fn test_string_length_limit() {
        let mut de = Deserializer::from_slice(b"5:hello")
            .with_options(DecodeOptions::new().with_max_string_len(4));
        assert!(matches!(
            de.parse_value(),
            Err(Error::StringTooLong {
                declared: 5,
                limit: 4,
                position: 0
            })
        ));
    }

    #[test]
    fn test_end_detects_trailing_data() {
        let mut de = Deserializer::from_slice(b"i1ex");
        assert!(de.parse_value().is_ok());
        assert!(matches!(de.end(), Err(Error::TrailingData { position: 3 })));
    }

    #[test]
    fn test_reader_source() {
        let input = b"d4:infod6:lengthi1024e4:name8:demo.txtee".to_vec();
        let mut de = Deserializer::from_reader(std::io::Cursor::new(input));
        let value = de.parse_value().unwrap();
        let info = value.get("info").unwrap();
        assert_eq!(info.get("length").and_then(Value::as_i64), Some(1024));
        assert_eq!(info.get("name").and_then(Value::as_str), Some("demo.txt"));
        assert!(de.end().is_ok());

        let mut de = Deserializer::from_reader(&b"10:abcde"[..]);
        assert!(matches!(
            de.parse_value(),
            Err(Error::TruncatedStringBody { available: 5, .. })
        ));
    }

    #[test]
    fn test_value_deserializer_integers() {
        let wide: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
        let value = Value::Integer(wide.clone());
        let back: Value = serde::Deserialize::deserialize(ValueDeserializer::new(value)).unwrap();
        assert_eq!(back, Value::Integer(wide));

        let n: u128 = serde::Deserialize::deserialize(ValueDeserializer::new(Value::from(
            u128::MAX,
        )))
        .unwrap();
        assert_eq!(n, u128::MAX);
    }
}
