//! Codec configuration.

use serde::{Deserialize, Serialize};

/// How large an encoded ExtIDs block may be.
///
/// The block size field is two bytes on the wire. Some writers declared it
/// as a signed 16-bit integer, so blocks of 32768 bytes or more can be
/// misread by readers that follow them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockSizeLimit {
    /// Full unsigned 16-bit range (up to 65535 bytes).
    #[default]
    Unsigned,
    /// Signed 16-bit range (up to 32767 bytes).
    Signed,
}

impl BlockSizeLimit {
    /// Largest block size, in bytes, allowed under this limit.
    pub const fn max(self) -> usize {
        match self {
            BlockSizeLimit::Unsigned => u16::MAX as usize,
            BlockSizeLimit::Signed => i16::MAX as usize,
        }
    }
}

/// Codec configuration.
///
/// Only encoding is affected. Decoding always reads the block size as an
/// unsigned 16-bit integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Upper bound on the encoded ExtIDs block.
    pub block_size_limit: BlockSizeLimit,
}

impl CodecConfig {
    /// Configuration that keeps blocks readable as signed 16-bit sizes.
    pub fn signed_block_size() -> Self {
        Self {
            block_size_limit: BlockSizeLimit::Signed,
        }
    }
}
