use num_bigint::BigInt;
use serde_bencode::{bencode, encode, BencodeMap, ByteString, Value};

#[test]
fn test_bencode_macro_integers() {
    assert_eq!(bencode!(42), Value::Integer(BigInt::from(42)));
    assert_eq!(bencode!(-123), Value::Integer(BigInt::from(-123)));
    assert_eq!(bencode!(u64::MAX), Value::Integer(BigInt::from(u64::MAX)));
}

#[test]
fn test_bencode_macro_strings() {
    assert_eq!(bencode!("hello world"), Value::Bytes(ByteString::from("hello world")));
    assert_eq!(bencode!(""), Value::Bytes(ByteString::default()));
    assert_eq!(bencode!(b"\xde\xad"), Value::Bytes(ByteString::new(&[0xde, 0xad])));
}

#[test]
fn test_bencode_macro_lists() {
    assert_eq!(bencode!([]), Value::List(vec![]));

    let mixed = bencode!([1, "hello", [2, (-3)], {}]);
    assert_eq!(
        mixed,
        Value::List(vec![
            Value::from(1),
            Value::from("hello"),
            Value::List(vec![Value::from(2), Value::from(-3)]),
            Value::Dict(BencodeMap::new()),
        ])
    );
}

#[test]
fn test_bencode_macro_dicts() {
    assert_eq!(bencode!({}), Value::Dict(BencodeMap::new()));

    let simple = bencode!({
        "name": "Alice",
        "age": 30,
    });

    match simple {
        Value::Dict(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get("name"), Some(&Value::from("Alice")));
            assert_eq!(map.get("age"), Some(&Value::from(30)));
        }
        _ => panic!("Expected dictionary"),
    }
}

#[test]
fn test_bencode_macro_nested() {
    let nested = bencode!({
        "user": {
            "id": 123,
            "name": "Bob"
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let user = nested.get("user").and_then(Value::as_dict).unwrap();
    assert_eq!(user.get("id").and_then(Value::as_i64), Some(123));
    assert_eq!(user.get("name").and_then(Value::as_str), Some("Bob"));

    let tags = nested.get("tags").and_then(Value::as_list).unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].as_str(), Some("developer"));

    assert_eq!(
        encode(&nested).unwrap(),
        b"d5:counti42e4:tagsl5:admin9:developere4:userd2:idi123e4:name3:Bobee".to_vec()
    );
}

#[test]
fn test_bencode_macro_expressions() {
    let name = String::from("dynamic");
    let sizes: Vec<Value> = (1..=3).map(Value::from).collect();

    let value = bencode!({
        "name": (name.clone()),
        "sizes": (sizes),
        "raw": (ByteString::new(&[0, 1]))
    });

    assert_eq!(value.get("name").and_then(Value::as_str), Some("dynamic"));
    assert_eq!(
        value.get("sizes").and_then(Value::as_list).map(Vec::len),
        Some(3)
    );
    assert_eq!(value.get("raw").and_then(Value::as_bytes), Some(&[0u8, 1][..]));
}

#[test]
fn test_value_methods() {
    let int_val = bencode!(7);
    assert!(int_val.is_integer());
    assert!(!int_val.is_bytes());
    assert!(!int_val.is_list());
    assert!(!int_val.is_dict());
    assert_eq!(int_val.kind(), "integer");

    let str_val = bencode!("hello");
    assert!(str_val.is_bytes());
    assert_eq!(str_val.as_str(), Some("hello"));
    assert_eq!(str_val.as_i64(), None);

    let list_val = bencode!([1, 2, 3]);
    assert!(list_val.is_list());
    assert_eq!(list_val.as_list().unwrap().len(), 3);

    let dict_val = bencode!({"key": "value"});
    assert!(dict_val.is_dict());
    assert_eq!(dict_val.as_dict().unwrap().len(), 1);
    assert_eq!(dict_val.get("missing"), None);
}
