//! Reading a BitTorrent metainfo file into typed records.
//!
//! Run with: cargo run --example metainfo [path/to/file.torrent]
//!
//! Without a path, a small built-in torrent is used.

use serde::{Deserialize, Serialize};
use serde_bencode::{bencode, decode, encode, from_bytes, ByteString, TextEncoding};
use std::error::Error;
use std::fs;

const PIECE_HASH_LEN: usize = 20;

#[derive(Debug, Serialize, Deserialize)]
struct FileEntry {
    length: u64,
    path: Vec<ByteString>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Info {
    name: ByteString,
    #[serde(rename = "piece length")]
    piece_length: u64,
    pieces: ByteString,
    #[serde(default)]
    length: Option<u64>,
    #[serde(default)]
    files: Option<Vec<FileEntry>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Metainfo {
    #[serde(default)]
    announce: Option<String>,
    #[serde(rename = "creation date", default)]
    creation_date: Option<i64>,
    #[serde(default)]
    comment: Option<ByteString>,
    info: Info,
}

fn sample_torrent() -> Result<Vec<u8>, Box<dyn Error>> {
    let torrent = bencode!({
        "announce": "http://tracker.example.com:6969/announce",
        "comment": "sample",
        "creation date": 1700000000,
        "info": {
            "files": [
                { "length": 300000, "path": ["docs", "guide.pdf"] },
                { "length": 12, "path": ["README"] }
            ],
            "name": "sample-bundle",
            "piece length": 262144,
            "pieces": (vec![0x11u8; 2 * PIECE_HASH_LEN])
        }
    });
    Ok(encode(&torrent)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let bytes = match std::env::args().nth(1) {
        Some(path) => fs::read(path)?,
        None => sample_torrent()?,
    };

    let meta: Metainfo = from_bytes(&bytes)?;
    let info = &meta.info;

    println!("Name:          {}", info.name.text(TextEncoding::Utf8));
    if let Some(announce) = &meta.announce {
        println!("Tracker:       {}", announce);
    }
    if let Some(date) = meta.creation_date {
        println!("Created (unix): {}", date);
    }
    if let Some(comment) = &meta.comment {
        println!("Comment:       {}", comment.text(TextEncoding::Latin1));
    }
    println!("Piece length:  {} bytes", info.piece_length);
    println!("Pieces:        {}", info.pieces.len() / PIECE_HASH_LEN);

    match (&info.length, &info.files) {
        (Some(length), _) => println!("Single file:   {} bytes", length),
        (None, Some(files)) => {
            let total: u64 = files.iter().map(|f| f.length).sum();
            println!("Files:         {} ({} bytes total)", files.len(), total);
            for file in files {
                let path: Vec<_> = file.path.iter().map(|p| p.text(TextEncoding::Utf8)).collect();
                println!("  {:>10}  {}", file.length, path.join("/"));
            }
        }
        (None, None) => println!("No file layout in info dictionary"),
    }

    // The info-hash is computed over these exact bytes.
    let raw = decode(&bytes)?;
    if let Some(info_value) = raw.get("info") {
        let info_bytes = encode(info_value)?;
        println!("Info dictionary: {} canonical bytes", info_bytes.len());
    }

    Ok(())
}
