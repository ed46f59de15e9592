//! Basic bencode serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_bencode::{from_bytes, to_bytes, ByteString};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Peer {
    ip: String,
    port: u16,
    #[serde(rename = "peer id")]
    peer_id: ByteString,
}

fn main() -> Result<(), Box<dyn Error>> {
    let peers = vec![
        Peer {
            ip: "10.0.0.1".to_string(),
            port: 6881,
            peer_id: ByteString::new(b"-AB1234-0123456789ab"),
        },
        Peer {
            ip: "10.0.0.2".to_string(),
            port: 51413,
            peer_id: ByteString::new(b"-CD5678-ba9876543210"),
        },
    ];

    // Serialize to bencode
    let bytes = to_bytes(&peers)?;
    println!("Bencode output:\n{}\n", ByteString::from(bytes.clone()));

    // Deserialize back to struct
    let peers_back: Vec<Peer> = from_bytes(&bytes)?;
    assert_eq!(peers, peers_back);
    println!("✓ Round-trip successful");

    Ok(())
}
