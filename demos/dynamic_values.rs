//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_bencode::{bencode, decode, encode, from_value, to_value, ByteString, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Announce {
    interval: u32,
    peers: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tracker response dynamically with the bencode! macro
    let response = bencode!({
        "interval": 1800,
        "peers": ["10.0.0.1:6881", "10.0.0.2:6881"],
        "complete": 12,
        "incomplete": 3
    });

    let bytes = encode(&response)?;
    println!("Encoded:\n{}\n", ByteString::from(bytes.clone()));

    // Access values dynamically
    let decoded = decode(&bytes)?;
    if let Some(interval) = decoded.get("interval").and_then(Value::as_i64) {
        println!("Accessing field 'interval': {}", interval);
    }
    if let Some(peers) = decoded.get("peers").and_then(Value::as_list) {
        println!("Accessing field 'peers': {} items", peers.len());
    }
    println!("Display form: {}\n", decoded);

    // Convert into a typed record, ignoring the extra keys
    let announce: Announce = from_value(decoded)?;
    println!("Typed: {:?}", announce);

    // Convert a struct back to Value
    let value = to_value(&announce)?;
    println!("Type checks:");
    println!("  is_dict:  {}", value.is_dict());
    println!("  is_list:  {}", value.is_list());
    println!("  is_bytes: {}", value.is_bytes());

    Ok(())
}
