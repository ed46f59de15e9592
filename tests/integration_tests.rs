use serde::{Deserialize, Serialize};
use serde_bencode::{
    bencode, decode, encode, from_bytes, from_reader, from_value, to_bytes, to_value, to_writer,
    ByteString, Error, TextEncoding, Value,
};
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FileEntry {
    length: u64,
    path: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Info {
    name: String,
    #[serde(rename = "piece length")]
    piece_length: u64,
    pieces: ByteString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    private: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Metainfo {
    announce: String,
    #[serde(
        rename = "announce-list",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    announce_list: Option<Vec<Vec<String>>>,
    #[serde(rename = "creation date", default, skip_serializing_if = "Option::is_none")]
    creation_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(rename = "created by", default, skip_serializing_if = "Option::is_none")]
    created_by: Option<String>,
    info: Info,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Message {
    Choke,
    Have(u32),
    Span(u32, u32),
    Request { index: u32, begin: u32, length: u32 },
}

fn sample_pieces() -> Vec<u8> {
    (0u8..40).map(|b| b.wrapping_mul(37) ^ 0xa5).collect()
}

fn single_file_torrent() -> Value {
    bencode!({
        "announce": "http://tracker.example.com:6969/announce",
        "announce-list": [
            ["http://tracker.example.com:6969/announce"],
            ["udp://backup.example.org:1337"]
        ],
        "comment": "demo torrent",
        "created by": "mktorrent 1.1",
        "creation date": 1700000000,
        "info": {
            "length": 1048576,
            "name": "ubuntu.iso",
            "piece length": 262144,
            "pieces": (sample_pieces())
        }
    })
}

#[test]
fn test_metainfo_single_file() {
    let bytes = encode(&single_file_torrent()).unwrap();
    let meta: Metainfo = from_bytes(&bytes).unwrap();

    assert_eq!(meta.announce, "http://tracker.example.com:6969/announce");
    assert_eq!(meta.creation_date, Some(1_700_000_000));
    assert_eq!(meta.created_by.as_deref(), Some("mktorrent 1.1"));
    assert_eq!(
        meta.announce_list.as_ref().map(Vec::len),
        Some(2),
        "two announce tiers"
    );
    assert_eq!(meta.info.name, "ubuntu.iso");
    assert_eq!(meta.info.piece_length, 262_144);
    assert_eq!(meta.info.length, Some(1_048_576));
    assert_eq!(meta.info.pieces.as_bytes(), sample_pieces().as_slice());
    assert!(meta.info.files.is_none());

    // Re-encoding the typed record reproduces the canonical input exactly.
    assert_eq!(to_bytes(&meta).unwrap(), bytes);
}

#[test]
fn test_metainfo_multi_file() {
    let torrent = bencode!({
        "announce": "http://tracker.example.com/announce",
        "info": {
            "files": [
                { "length": 10, "path": ["docs", "readme.txt"] },
                { "length": 20, "path": ["data.bin"] }
            ],
            "name": "bundle",
            "piece length": 16384,
            "pieces": (vec![0u8; 20]),
            "private": 1
        }
    });

    let meta: Metainfo = from_value(torrent.clone()).unwrap();
    let files = meta.info.files.as_ref().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, vec!["docs", "readme.txt"]);
    assert_eq!(files[1].length, 20);
    assert_eq!(meta.info.private, Some(1));
    assert_eq!(meta.info.length, None);

    assert_eq!(to_value(&meta).unwrap(), torrent);
}

#[test]
fn test_info_dictionary_bytes_are_stable() {
    let bytes = encode(&single_file_torrent()).unwrap();
    let decoded = decode(&bytes).unwrap();
    let info = decoded.get("info").unwrap();

    let meta: Metainfo = from_bytes(&bytes).unwrap();
    assert_eq!(encode(info).unwrap(), to_bytes(&meta.info).unwrap());

    let info_bytes = encode(info).unwrap();
    assert!(bytes
        .windows(info_bytes.len())
        .any(|window| window == info_bytes.as_slice()));
}

#[test]
fn test_non_canonical_input_is_canonicalized() {
    let input = b"d4:spaml1:a1:be3:cow3:mooe";
    let value = decode(input).unwrap();
    assert_eq!(encode(&value).unwrap(), b"d3:cow3:moo4:spaml1:a1:bee");
}

#[test]
fn test_enum_roundtrip() {
    let messages = vec![
        Message::Choke,
        Message::Have(7),
        Message::Span(1, 2),
        Message::Request {
            index: 1,
            begin: 16384,
            length: 16384,
        },
    ];

    let bytes = to_bytes(&messages).unwrap();
    assert_eq!(
        bytes,
        b"l5:Choked4:Havei7eed4:Spanli1ei2eeed7:Requestd5:begini16384e5:indexi1e6:lengthi16384eeee"
            .to_vec()
    );
    let back: Vec<Message> = from_bytes(&bytes).unwrap();
    assert_eq!(back, messages);
}

#[test]
fn test_maps_with_string_keys() {
    let mut scores = HashMap::new();
    scores.insert("zed".to_string(), 3u32);
    scores.insert("amy".to_string(), 10u32);

    let bytes = to_bytes(&scores).unwrap();
    assert_eq!(bytes, b"d3:amyi10e3:zedi3ee");

    let back: BTreeMap<String, u32> = from_bytes(&bytes).unwrap();
    assert_eq!(back.get("amy"), Some(&10));
    assert_eq!(back.len(), 2);
}

#[test]
fn test_wide_integers_through_value_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wide {
        n: Value,
    }

    let input = b"d1:ni-99999999999999999999999999999999999999999ee";
    let wide: Wide = from_bytes(input).unwrap();
    assert_eq!(
        wide.n.as_integer().map(ToString::to_string).as_deref(),
        Some("-99999999999999999999999999999999999999999")
    );
    assert_eq!(to_bytes(&wide).unwrap(), input.to_vec());
}

#[test]
fn test_integer_range_checks() {
    assert!(from_bytes::<u8>(b"i255e").is_ok());
    assert!(from_bytes::<u8>(b"i256e").is_err());
    assert!(from_bytes::<u64>(b"i-1e").is_err());
    assert_eq!(from_bytes::<u128>(b"i18446744073709551616e").unwrap(), 1u128 << 64);
}

#[test]
fn test_binary_strings() {
    let raw = b"4:\xff\xfe\x00\x01";
    assert!(from_bytes::<String>(raw).is_err());

    let bytes: ByteString = from_bytes(raw).unwrap();
    assert_eq!(bytes.as_bytes(), &[0xff, 0xfe, 0x00, 0x01]);
    assert_eq!(bytes.text(TextEncoding::Latin1), "\u{ff}\u{fe}\u{0}\u{1}");
}

#[test]
fn test_serde_json_values_through_the_encoder() {
    let json = serde_json::json!({
        "name": "demo",
        "sizes": [1, 2, 3],
        "nested": { "k": "v" }
    });
    assert_eq!(
        to_bytes(&json).unwrap(),
        b"d4:name4:demo6:nestedd1:k1:ve5:sizesli1ei2ei3eee".to_vec()
    );

    assert!(matches!(
        to_bytes(&serde_json::json!({ "x": null })),
        Err(Error::UnsupportedType(_))
    ));
    assert!(matches!(
        to_bytes(&serde_json::json!([1.5])),
        Err(Error::UnsupportedType(_))
    ));
    assert!(matches!(
        to_bytes(&serde_json::json!(true)),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_unsupported_struct_fields() {
    #[derive(Serialize)]
    struct Flags {
        enabled: bool,
    }

    #[derive(Serialize)]
    struct Ratio {
        value: f32,
    }

    assert!(matches!(
        to_bytes(&Flags { enabled: true }),
        Err(Error::UnsupportedType(_))
    ));
    assert!(matches!(
        to_value(&Ratio { value: 0.5 }),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_missing_field_is_reported() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Needs {
        present: u32,
        absent: u32,
    }

    let err = from_bytes::<Needs>(b"d7:presenti1ee").unwrap_err();
    assert!(err.to_string().contains("absent"));
}

#[test]
fn test_from_reader_and_to_writer() {
    let tracker_response = bencode!({
        "interval": 1800,
        "peers": [
            { "ip": "10.0.0.1", "port": 6881 },
            { "ip": "10.0.0.2", "port": 6882 }
        ]
    });

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &tracker_response).unwrap();

    #[derive(Deserialize, Debug, PartialEq)]
    struct Peer {
        ip: String,
        port: u16,
    }

    #[derive(Deserialize, Debug)]
    struct Response {
        interval: u32,
        peers: Vec<Peer>,
    }

    let response: Response = from_reader(Cursor::new(buffer)).unwrap();
    assert_eq!(response.interval, 1800);
    assert_eq!(
        response.peers[1],
        Peer {
            ip: "10.0.0.2".to_string(),
            port: 6882
        }
    );
}

#[test]
fn test_error_offsets_in_nested_input() {
    let err = decode(b"d4:infod6:lengthi01eee").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidIntegerLiteral { ref literal, position: 17 } if literal == "01"
    ));
    assert_eq!(err.position(), Some(17));
    assert_eq!(
        err.to_string(),
        "invalid integer literal \"01\" at byte 17"
    );
}
