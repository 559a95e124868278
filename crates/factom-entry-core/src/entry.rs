//! Entry: the record that carries user data into a chain.
//!
//! An entry belongs to the chain named by its `chain_id`, carries an ordered
//! list of external IDs and an opaque content payload.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::chain_id::derive_chain_id;
use crate::codec::{self, EXT_ID_LEN_FIELD, HEADER_SIZE};
use crate::error::Result;
use crate::hash::Hash;

/// The entry version written by [`Entry::new_chain`] and [`EntryBuilder`].
pub const ENTRY_VERSION: u8 = 0;

/// A complete entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Format version. Carried, not interpreted.
    pub version: u8,

    /// The chain this entry belongs to.
    pub chain_id: Hash,

    /// External IDs. Order is significant.
    pub ext_ids: Vec<Bytes>,

    /// Payload bytes.
    pub content: Bytes,
}

impl Entry {
    /// Create the first entry of a new chain.
    ///
    /// The chain ID is derived from the given ExtIDs.
    pub fn new_chain<I, T>(ext_ids: I, content: impl Into<Bytes>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        EntryBuilder::new(Hash::ZERO)
            .ext_ids(ext_ids)
            .content(content)
            .chain_from_ext_ids()
            .build()
    }

    /// Derive the chain ID named by this entry's ExtIDs.
    ///
    /// This equals `chain_id` only for the first entry of a chain.
    pub fn compute_chain_id(&self) -> Hash {
        derive_chain_id(&self.ext_ids)
    }

    /// Encode to canonical bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        codec::encode_entry(self)
    }

    /// Decode from canonical bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        codec::decode_entry(bytes)
    }

    /// Size of the canonical encoding, in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.ext_ids_block_len() + self.content.len()
    }

    /// Size of the encoded ExtIDs block, in bytes.
    pub fn ext_ids_block_len(&self) -> usize {
        self.ext_ids
            .iter()
            .map(|x| EXT_ID_LEN_FIELD + x.len())
            .sum()
    }
}

/// Builder for creating entries.
pub struct EntryBuilder {
    version: u8,
    chain_id: Hash,
    derive_chain: bool,
    ext_ids: Vec<Bytes>,
    content: Bytes,
}

impl EntryBuilder {
    /// Start building an entry for the given chain.
    pub fn new(chain_id: Hash) -> Self {
        Self {
            version: ENTRY_VERSION,
            chain_id,
            derive_chain: false,
            ext_ids: Vec::new(),
            content: Bytes::new(),
        }
    }

    /// Set the version.
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Append one ExtID.
    pub fn ext_id(mut self, ext_id: impl Into<Bytes>) -> Self {
        self.ext_ids.push(ext_id.into());
        self
    }

    /// Append several ExtIDs, in order.
    pub fn ext_ids<I, T>(mut self, ext_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        self.ext_ids.extend(ext_ids.into_iter().map(Into::into));
        self
    }

    /// Set the content.
    pub fn content(mut self, content: impl Into<Bytes>) -> Self {
        self.content = content.into();
        self
    }

    /// Replace the chain ID with one derived from the final ExtIDs at build time.
    pub fn chain_from_ext_ids(mut self) -> Self {
        self.derive_chain = true;
        self
    }

    /// Build the entry.
    pub fn build(self) -> Entry {
        let chain_id = if self.derive_chain {
            derive_chain_id(&self.ext_ids)
        } else {
            self.chain_id
        };

        Entry {
            version: self.version,
            chain_id,
            ext_ids: self.ext_ids,
            content: self.content,
        }
    }
}
