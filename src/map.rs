//! Dictionary type for bencode values.
//!
//! This module provides [`BencodeMap`], a wrapper around [`IndexMap`] keyed by
//! [`ByteString`]. Iteration follows insertion order, which for decoded input
//! is the order the keys appeared on the wire. Equality ignores order, and the
//! encoder always writes keys sorted by their raw bytes, so insertion order
//! never leaks into the canonical form.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bencode::{BencodeMap, Value};
//!
//! let mut map = BencodeMap::new();
//! map.insert("spam", Value::from("eggs"));
//! map.insert("cow", Value::from("moo"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("cow").and_then(|v| v.as_str()), Some("moo"));
//!
//! let sorted: Vec<_> = map.sorted_keys().into_iter().map(|k| k.to_string()).collect();
//! assert_eq!(sorted, vec!["cow", "spam"]);
//! ```

use crate::{ByteString, Value};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// A map from byte-string keys to bencode values.
///
/// Two maps are equal when they hold the same entries, regardless of the
/// order in which the entries were inserted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BencodeMap(IndexMap<ByteString, Value>);

impl BencodeMap {
    /// Creates an empty `BencodeMap`.
    #[must_use]
    pub fn new() -> Self {
        BencodeMap(IndexMap::new())
    }

    /// Creates an empty `BencodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BencodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced, the key
    /// keeps its original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::{BencodeMap, Value};
    ///
    /// let mut map = BencodeMap::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert("key", Value::from(43)).is_some());
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(43));
    /// ```
    pub fn insert<K: Into<ByteString>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value stored under the raw key bytes.
    #[must_use]
    pub fn get<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<&Value> {
        self.0.get(key.as_ref())
    }

    /// Returns `true` if the map holds an entry for the key.
    #[must_use]
    pub fn contains_key<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, ByteString, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, ByteString, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, ByteString, Value> {
        self.0.iter()
    }

    /// Returns the entries ordered by ascending raw key bytes.
    ///
    /// This is the order in which the encoder writes them.
    #[must_use]
    pub fn sorted(&self) -> BTreeMap<&ByteString, &Value> {
        self.0.iter().collect()
    }

    /// Returns the keys ordered by ascending raw key bytes.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&ByteString> {
        let mut keys: Vec<&ByteString> = self.0.keys().collect();
        keys.sort_unstable();
        keys
    }
}

impl From<BTreeMap<ByteString, Value>> for BencodeMap {
    fn from(map: BTreeMap<ByteString, Value>) -> Self {
        BencodeMap(map.into_iter().collect())
    }
}

impl From<BencodeMap> for BTreeMap<ByteString, Value> {
    fn from(map: BencodeMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for BencodeMap {
    type Item = (ByteString, Value);
    type IntoIter = indexmap::map::IntoIter<ByteString, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BencodeMap {
    type Item = (&'a ByteString, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ByteString, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<ByteString>> FromIterator<(K, Value)> for BencodeMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        BencodeMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
