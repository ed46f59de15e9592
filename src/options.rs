//! Configuration options for bencode decoding.
//!
//! The defaults accept any well-formed input: keys may arrive in any order,
//! a repeated key keeps its last value, and there is no ceiling on nesting
//! depth or string length. Applications that decode untrusted input should set
//! the ceilings they need.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bencode::{decode_with_options, DecodeOptions, DuplicateKeys, Error};
//!
//! let input = b"d1:ai1e1:ai2ee";
//!
//! // Default: last write wins
//! let value = decode_with_options(input, DecodeOptions::new()).unwrap();
//! assert_eq!(value.get("a").and_then(|v| v.as_i64()), Some(2));
//!
//! // Reject repeated keys
//! let options = DecodeOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
//! assert!(matches!(
//!     decode_with_options(input, options),
//!     Err(Error::DuplicateKey { .. })
//! ));
//! ```

/// What the decoder does when a dictionary repeats a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep the last value; the key stays at the position of its first occurrence.
    #[default]
    LastWins,
    /// Fail with [`Error::DuplicateKey`](crate::Error::DuplicateKey).
    Reject,
}

/// Whether the decoder checks that dictionary keys arrive sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Accept keys in any order.
    #[default]
    Permissive,
    /// Require strictly ascending keys, failing with
    /// [`Error::UnsortedKey`](crate::Error::UnsortedKey) otherwise.
    Strict,
}

/// Configuration options for bencode decoding.
///
/// # Examples
///
/// ```rust
/// use serde_bencode::{DecodeOptions, KeyOrder};
///
/// let options = DecodeOptions::new()
///     .with_key_order(KeyOrder::Strict)
///     .with_max_depth(32)
///     .with_max_string_len(16 * 1024 * 1024);
/// assert_eq!(options.max_depth, Some(32));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub duplicate_keys: DuplicateKeys,
    pub key_order: KeyOrder,
    /// Maximum number of nested lists and dictionaries.
    pub max_depth: Option<usize>,
    /// Maximum declared length of a single byte string.
    pub max_string_len: Option<usize>,
}

impl DecodeOptions {
    /// Creates permissive options with no ceilings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that only accept canonical dictionaries: keys strictly
    /// ascending, no repeats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bencode::{decode_with_options, DecodeOptions};
    ///
    /// assert!(decode_with_options(b"d1:ai1e1:bi2ee", DecodeOptions::strict()).is_ok());
    /// assert!(decode_with_options(b"d1:bi2e1:ai1ee", DecodeOptions::strict()).is_err());
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        DecodeOptions {
            duplicate_keys: DuplicateKeys::Reject,
            key_order: KeyOrder::Strict,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    #[must_use]
    pub fn with_key_order(mut self, order: KeyOrder) -> Self {
        self.key_order = order;
        self
    }

    /// Sets the maximum nesting depth. A top-level list counts as depth 1.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sets the maximum declared length accepted for a byte string.
    #[must_use]
    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = Some(len);
        self
    }
}
