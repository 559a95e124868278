//! # Factom Entry Core
//!
//! The canonical wire format for entries and the derivation of chain IDs
//! from external IDs.
//!
//! This crate contains no I/O beyond writing to a caller-supplied sink, no
//! storage and no networking. It does not enforce ExtID count or size
//! policy; that belongs to whoever validates entries before or after encoding.
//!
//! ## Key Types
//!
//! - [`Entry`] - Version, chain ID, ordered ExtIDs and content
//! - [`Hash`] - 32-byte identifier
//! - [`EntryCodec`] - Encoder/decoder, configured by [`CodecConfig`]
//!
//! ## Example
//!
//! ```rust
//! use factom_entry_core::{decode_entry, derive_chain_id, Entry};
//!
//! let entry = Entry::new_chain([&b"my"[..], &b"chain"[..]], &b"first entry"[..]);
//! assert_eq!(entry.chain_id, derive_chain_id(&entry.ext_ids));
//!
//! let bytes = entry.encode().unwrap();
//! assert_eq!(decode_entry(&bytes).unwrap(), entry);
//! ```

pub mod chain_id;
pub mod codec;
pub mod config;
pub mod entry;
pub mod error;
pub mod hash;

pub use chain_id::derive_chain_id;
pub use codec::{
    decode_entry, decode_entry_bytes, encode_entry, encode_ext_ids, EntryCodec, HEADER_SIZE,
    MAX_EXT_ID_LEN,
};
pub use config::{BlockSizeLimit, CodecConfig};
pub use entry::{Entry, EntryBuilder, ENTRY_VERSION};
pub use error::{EntryError, Result};
pub use hash::{Hash, HASH_SIZE};
