/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Lists use `[...]`, dictionaries use `{ "key": value, ... }` with string or
/// byte-string literal keys, and anything else goes through
/// `Value::from`. Negative numbers inside lists and dictionaries must be
/// parenthesized.
///
/// ```rust
/// use serde_bencode::{bencode, encode};
///
/// let value = bencode!({
///     "announce": "http://tracker.example/announce",
///     "info": {
///         "length": 1024,
///         "name": "demo.txt",
///         "offsets": [0, (-1)]
///     }
/// });
///
/// assert_eq!(
///     encode(&value).unwrap(),
///     b"d8:announce31:http://tracker.example/announce4:infod6:lengthi1024e4:name8:demo.txt7:offsetsli0ei-1eeee".to_vec()
/// );
/// ```
#[macro_export]
macro_rules! bencode {
    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(::std::vec![$($crate::bencode!($elem)),*])
    };

    ({}) => {
        $crate::Value::Dict($crate::BencodeMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::BencodeMap::new();
        $(
            map.insert($key, $crate::bencode!($value));
        )*
        $crate::Value::Dict(map)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}

#[cfg(test)]
mod tests {
    use crate::{BencodeMap, Value};

    #[test]
    fn test_bencode_macro_scalars() {
        assert_eq!(bencode!(42), Value::from(42));
        assert_eq!(bencode!(-42), Value::from(-42));
        assert_eq!(bencode!("hello"), Value::from("hello"));
        assert_eq!(bencode!(b"\x00\x01"), Value::from(vec![0u8, 1]));
    }

    #[test]
    fn test_bencode_macro_lists() {
        assert_eq!(bencode!([]), Value::List(vec![]));

        let list = bencode!([1, "two", [3]]);
        assert_eq!(
            list,
            Value::List(vec![
                Value::from(1),
                Value::from("two"),
                Value::List(vec![Value::from(3)]),
            ])
        );
    }

    #[test]
    fn test_bencode_macro_dicts() {
        assert_eq!(bencode!({}), Value::Dict(BencodeMap::new()));

        let dict = bencode!({
            "name": "Alice",
            b"raw": (-7),
            "nested": { "k": [] }
        });

        let map = dict.as_dict().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("name"), Some(&Value::from("Alice")));
        assert_eq!(map.get("raw"), Some(&Value::from(-7)));
        assert_eq!(
            dict.get("nested").and_then(|n| n.get("k")),
            Some(&Value::List(vec![]))
        );
    }
}
