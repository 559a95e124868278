//! Canonical binary encoding of entries.
//!
//! Layout (all integers big-endian):
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 1 | version |
//! | 1 | 32 | chain_id |
//! | 33 | 2 | ExtIDs block size, in bytes |
//! | 35 | block size | ExtIDs block: (2-byte length, payload)* |
//! | 35 + block size | remainder | content |
//!
//! Content has no length prefix, so the encoding is not self-delimiting.
//! Framing is the transport's job.

use bytes::Bytes;
use std::io::Write;

use crate::config::CodecConfig;
use crate::entry::Entry;
use crate::error::{EntryError, Result};
use crate::hash::{Hash, HASH_SIZE};

/// Size of the version field.
pub const VERSION_SIZE: usize = 1;

/// Size of the ExtIDs block size field.
pub const BLOCK_SIZE_FIELD: usize = 2;

/// Size of each ExtID's length prefix.
pub const EXT_ID_LEN_FIELD: usize = 2;

/// Bytes preceding the ExtIDs block.
pub const HEADER_SIZE: usize = VERSION_SIZE + HASH_SIZE + BLOCK_SIZE_FIELD;

/// Longest ExtID the length prefix can describe.
pub const MAX_EXT_ID_LEN: usize = u16::MAX as usize;

/// Entry encoder and decoder.
#[derive(Debug, Clone, Default)]
pub struct EntryCodec {
    config: CodecConfig,
}

impl EntryCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The codec's configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an entry to canonical bytes.
    pub fn encode(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(entry.encoded_len());
        self.write_entry(entry, &mut buf)?;
        Ok(buf)
    }

    /// Write an entry's canonical bytes to `writer`, returning the byte count.
    pub fn write_entry<W: Write>(&self, entry: &Entry, writer: &mut W) -> Result<usize> {
        let block = self.encode_ext_ids(&entry.ext_ids)?;
        // encode_ext_ids enforces the block limit, which is at most u16::MAX.
        let block_len = block.len() as u16;

        writer.write_all(&[entry.version])?;
        writer.write_all(entry.chain_id.as_bytes())?;
        writer.write_all(&block_len.to_be_bytes())?;
        writer.write_all(&block)?;
        writer.write_all(&entry.content)?;

        let written = HEADER_SIZE + block.len() + entry.content.len();
        tracing::trace!(
            version = entry.version,
            block_len = block.len(),
            content_len = entry.content.len(),
            written,
            "encoded entry"
        );
        Ok(written)
    }

    /// Encode ExtIDs as a sequence of (2-byte length, bytes) pairs.
    pub fn encode_ext_ids<T: AsRef<[u8]>>(&self, ext_ids: &[T]) -> Result<Vec<u8>> {
        let limit = self.config.block_size_limit.max();
        let mut buf = Vec::new();

        for ext_id in ext_ids {
            let ext_id = ext_id.as_ref();
            let len = u16::try_from(ext_id.len()).map_err(|_| {
                tracing::debug!(len = ext_id.len(), "ExtID too long to encode");
                EntryError::ValueTooLarge {
                    field: "ext_id",
                    len: ext_id.len(),
                    max: MAX_EXT_ID_LEN,
                }
            })?;
            buf.extend_from_slice(&len.to_be_bytes());
            buf.extend_from_slice(ext_id);
        }

        if buf.len() > limit {
            tracing::debug!(block_len = buf.len(), limit, "ExtIDs block too large to encode");
            return Err(EntryError::ValueTooLarge {
                field: "ext_ids_block",
                len: buf.len(),
                max: limit,
            });
        }

        Ok(buf)
    }

    /// Decode an entry from canonical bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<Entry> {
        self.decode_bytes(Bytes::copy_from_slice(bytes))
    }

    /// Decode an entry from a shared buffer.
    ///
    /// ExtIDs and content are slices of `bytes`; nothing is copied.
    pub fn decode_bytes(&self, bytes: Bytes) -> Result<Entry> {
        let mut cursor = Cursor::new(&bytes);

        let version = cursor.take(VERSION_SIZE, "version")?[0];

        let chain_id = cursor.take(HASH_SIZE, "chain_id")?;
        let chain_id = Hash::try_from(chain_id.as_ref()).map_err(|_| {
            EntryError::TruncatedInput {
                field: "chain_id",
                needed: HASH_SIZE,
                available: chain_id.len(),
            }
        })?;

        let block_len = cursor.take_u16("ext_ids_block_size")? as usize;
        let block = cursor.take(block_len, "ext_ids_block")?;
        let ext_ids = decode_ext_ids_block(&block)?;

        let content = cursor.rest();

        tracing::trace!(
            version,
            ext_ids = ext_ids.len(),
            content_len = content.len(),
            "decoded entry"
        );

        Ok(Entry {
            version,
            chain_id,
            ext_ids,
            content,
        })
    }
}

/// Split an ExtIDs block into its items.
///
/// Every item must end exactly within the block.
fn decode_ext_ids_block(block: &Bytes) -> Result<Vec<Bytes>> {
    let mut ext_ids = Vec::new();
    let mut cursor = Cursor::new(block);

    while cursor.remaining() > 0 {
        let offset = cursor.pos;

        if cursor.remaining() < EXT_ID_LEN_FIELD {
            return Err(malformed(offset, EXT_ID_LEN_FIELD, cursor.remaining()));
        }
        let len = cursor.take_u16("ext_id_len")? as usize;

        if cursor.remaining() < len {
            return Err(malformed(
                offset,
                EXT_ID_LEN_FIELD + len,
                EXT_ID_LEN_FIELD + cursor.remaining(),
            ));
        }
        ext_ids.push(cursor.take(len, "ext_id")?);
    }

    Ok(ext_ids)
}

fn malformed(offset: usize, needed: usize, remaining: usize) -> EntryError {
    tracing::debug!(offset, needed, remaining, "ExtID overruns declared block");
    EntryError::MalformedExtIdBlock {
        offset,
        needed,
        remaining,
    }
}

/// Read position over an immutable buffer.
struct Cursor<'a> {
    buf: &'a Bytes,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a Bytes) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `n` bytes as a shared slice.
    fn take(&mut self, n: usize, field: &'static str) -> Result<Bytes> {
        let available = self.remaining();
        if available < n {
            tracing::debug!(field, needed = n, available, "short read");
            return Err(EntryError::TruncatedInput {
                field,
                needed: n,
                available,
            });
        }
        let slice = self.buf.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(slice)
    }

    fn take_u16(&mut self, field: &'static str) -> Result<u16> {
        let b = self.take(2, field)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Everything after the current position.
    fn rest(&mut self) -> Bytes {
        let rest = self.buf.slice(self.pos..);
        self.pos = self.buf.len();
        rest
    }
}

/// Encode an entry with the default configuration.
pub fn encode_entry(entry: &Entry) -> Result<Vec<u8>> {
    EntryCodec::default().encode(entry)
}

/// Encode ExtIDs with the default configuration.
pub fn encode_ext_ids<T: AsRef<[u8]>>(ext_ids: &[T]) -> Result<Vec<u8>> {
    EntryCodec::default().encode_ext_ids(ext_ids)
}

/// Decode an entry from canonical bytes.
pub fn decode_entry(bytes: &[u8]) -> Result<Entry> {
    EntryCodec::default().decode(bytes)
}

/// Decode an entry from a shared buffer without copying.
pub fn decode_entry_bytes(bytes: Bytes) -> Result<Entry> {
    EntryCodec::default().decode_bytes(bytes)
}
