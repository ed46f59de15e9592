//! Dynamic value representation for bencode data.
//!
//! This module provides the [`Value`] enum, a closed set of the four kinds
//! bencode can express. Every decoded document is a `Value` tree and every
//! `Value` tree can be encoded.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_bencode::{bencode, Value};
//!
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let raw = Value::from(vec![0u8, 159, 146, 150]);
//!
//! let info = bencode!({
//!     "name": "example.txt",
//!     "length": 1024,
//!     "tags": ["a", "b"]
//! });
//! assert!(info.is_dict());
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use serde_bencode::{decode, Value};
//!
//! let value = decode(b"d4:spaml1:a1:bee").unwrap();
//! let list = value.get("spam").and_then(Value::as_list).unwrap();
//! assert_eq!(list[0].as_str(), Some("a"));
//! ```

use crate::{BencodeMap, ByteString, TextEncoding};
use num_bigint::BigInt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Newtype name used to carry integers wider than 64 bits through serde
/// as their decimal text. Only this crate's serializers and `Value` itself
/// interpret it.
pub(crate) const BIGINT_TOKEN: &str = "$serde_bencode::private::BigInt";

/// A bencode element.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::Value;
///
/// let int = Value::from(42);
/// let string = Value::from("hello");
/// let list = Value::List(vec![int.clone(), string.clone()]);
///
/// assert!(int.is_integer());
/// assert!(string.is_bytes());
/// assert_eq!(list.as_list().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A length-prefixed byte string, not necessarily valid UTF-8.
    Bytes(ByteString),
    /// An arbitrary-precision signed integer.
    Integer(BigInt),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary keyed by byte strings.
    Dict(BencodeMap),
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "byte string",
            Value::Integer(_) => "integer",
            Value::List(_) => "list",
            Value::Dict(_) => "dictionary",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// If the value is a byte string, returns its bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b.as_bytes()),
            _ => None,
        }
    }

    /// If the value is a byte string, returns it.
    #[inline]
    #[must_use]
    pub fn as_byte_string(&self) -> Option<&ByteString> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// If the value is a byte string holding valid UTF-8, returns it as `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(vec![0xffu8]).as_str(), None);
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_byte_string().and_then(ByteString::as_str)
    }

    /// If the value is a byte string, decodes it as text in the given encoding.
    #[must_use]
    pub fn as_text(&self, encoding: TextEncoding) -> Option<Cow<'_, str>> {
        self.as_byte_string().map(|b| b.text(encoding))
    }

    /// If the value is an integer, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// If the value is an integer that fits in `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::decode;
    ///
    /// assert_eq!(decode(b"i-42e").unwrap().as_i64(), Some(-42));
    /// assert_eq!(decode(b"i9223372036854775808e").unwrap().as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|i| i64::try_from(i).ok())
    }

    /// If the value is an integer that fits in `u64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_integer().and_then(|i| u64::try_from(i).ok())
    }

    /// If the value is a list, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// If the value is a dictionary, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&BencodeMap> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key if the value is a dictionary.
    #[must_use]
    pub fn get<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<&Value> {
        self.as_dict().and_then(|d| d.get(key))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bytes(b) => write!(f, "{:?}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::List(list) => {
                f.write_str("[")?;
                for (i, v) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
            Value::Dict(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.sorted().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bytes(b) => serializer.serialize_bytes(b.as_bytes()),
            Value::Integer(i) => {
                if let Ok(v) = i64::try_from(i) {
                    serializer.serialize_i64(v)
                } else if let Ok(v) = u64::try_from(i) {
                    serializer.serialize_u64(v)
                } else {
                    serializer.serialize_newtype_struct(BIGINT_TOKEN, &i.to_string())
                }
            }
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Dict(map) => {
                use serde::ser::SerializeMap;
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bencode value")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Value, E> {
                Ok(Value::Integer(BigInt::from(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::Bytes(ByteString::from(value)))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::Bytes(ByteString::from(value)))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Value, E> {
                Ok(Value::Bytes(ByteString::new(value)))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Value, E> {
                Ok(Value::Bytes(ByteString::from(value)))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                let digits = String::deserialize(deserializer)?;
                digits
                    .parse::<BigInt>()
                    .map(Value::Integer)
                    .map_err(de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::List(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = BencodeMap::new();
                while let Some((key, value)) = map.next_entry::<ByteString, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Dict(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => i64::try_from(&i)
                .map_err(|_| crate::Error::custom(format!("integer {} does not fit in i64", i))),
            other => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for BigInt {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bytes(b) => String::from_utf8(b.into_vec())
                .map_err(|e| crate::Error::custom(format!("byte string is not UTF-8: {}", e))),
            other => Err(crate::Error::custom(format!(
                "expected byte string, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b.into_vec()),
            other => Err(crate::Error::custom(format!(
                "expected byte string, found {}",
                other.kind()
            ))),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Bytes(ByteString::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Bytes(ByteString::from(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(ByteString::new(value))
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(ByteString::new(value))
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(ByteString::from(value))
    }
}

impl From<ByteString> for Value {
    fn from(value: ByteString) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BencodeMap> for Value {
    fn from(value: BencodeMap) -> Self {
        Value::Dict(value)
    }
}
