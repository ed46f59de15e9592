//! Byte sources for the decoder.
//!
//! The decoder decides which element comes next by looking at one byte
//! without consuming it, so every source supports a single byte of lookahead.
//! Two sources are provided:
//!
//! - [`SliceRead`]: an index cursor over an in-memory buffer
//! - [`IoRead`]: an adapter over any [`std::io::Read`] that buffers at most the
//!   one peeked byte
//!
//! Callers can implement [`Read`] for their own sources.

use crate::{Error, Result};
use std::io;

/// A sequential byte source with one byte of lookahead.
pub trait Read {
    /// Returns the next byte without consuming it, or `None` at end of input.
    fn peek_byte(&mut self) -> Result<Option<u8>>;

    /// Consumes and returns the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> Result<Option<u8>>;

    /// Appends up to `len` bytes to `out` and returns how many were appended.
    ///
    /// Fewer than `len` bytes are appended only when the source is exhausted.
    fn read_bytes(&mut self, len: usize, out: &mut Vec<u8>) -> Result<usize>;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;
}

/// A [`Read`] over a byte slice.
pub struct SliceRead<'a> {
    slice: &'a [u8],
    index: usize,
}

impl<'a> SliceRead<'a> {
    #[must_use]
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.slice[self.index..]
    }
}

impl Read for SliceRead<'_> {
    #[inline]
    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.slice.get(self.index).copied())
    }

    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.slice.get(self.index).copied();
        if byte.is_some() {
            self.index += 1;
        }
        Ok(byte)
    }

    fn read_bytes(&mut self, len: usize, out: &mut Vec<u8>) -> Result<usize> {
        let available = self.slice.len() - self.index;
        let take = len.min(available);
        out.extend_from_slice(&self.slice[self.index..self.index + take]);
        self.index += take;
        Ok(take)
    }

    #[inline]
    fn position(&self) -> usize {
        self.index
    }
}

/// A [`Read`] over an [`io::Read`] stream.
///
/// Bytes are pulled one at a time while scanning markers, length prefixes and
/// integer literals, so wrap unbuffered sources (files, sockets) in a
/// [`std::io::BufReader`].
pub struct IoRead<R> {
    reader: R,
    peeked: Option<u8>,
    position: usize,
}

impl<R: io::Read> IoRead<R> {
    pub fn new(reader: R) -> Self {
        IoRead {
            reader,
            peeked: None,
            position: 0,
        }
    }

    /// Returns the underlying reader.
    ///
    /// A byte that was peeked but not consumed is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill_one(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::io(&e)),
            }
        }
    }
}

impl<R: io::Read> Read for IoRead<R> {
    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.fill_one()?;
        }
        Ok(self.peeked)
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = match self.peeked.take() {
            Some(byte) => Some(byte),
            None => self.fill_one()?,
        };
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    fn read_bytes(&mut self, len: usize, out: &mut Vec<u8>) -> Result<usize> {
        let mut read = 0;
        if len > 0 {
            if let Some(byte) = self.peeked.take() {
                out.push(byte);
                read = 1;
            }
        }
        // `take` grows `out` as data arrives instead of trusting the declared length.
        let mut limited = io::Read::take(&mut self.reader, (len - read) as u64);
        let rest = io::Read::read_to_end(&mut limited, out).map_err(|e| Error::io(&e))?;
        read += rest;
        self.position += read;
        Ok(read)
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }
}
