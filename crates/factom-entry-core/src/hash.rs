//! The 32-byte identity type used for chain identifiers.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Size in bytes of a [`Hash`].
pub const HASH_SIZE: usize = 32;

/// A 32-byte opaque identifier.
///
/// Equality is by content. The only hash function attached to the type is
/// SHA-256, which is what chain IDs are derived with.
///
/// Bytes go in through [`Hash::from_bytes`] and come out through
/// [`Hash::as_bytes`]; the array itself is not reachable:
///
/// ```compile_fail
/// let mut id = factom_entry_core::Hash::ZERO;
/// id.0[0] = 1;
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Compute the SHA-256 hash of data.
    pub fn sha256(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != HASH_SIZE {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The all-zero hash.
    pub const ZERO: Self = Self([0u8; HASH_SIZE]);
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; HASH_SIZE] = slice.try_into()?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip() {
        let hash = Hash::from_bytes([0x42; 32]);
        let hex = hash.to_hex();
        let recovered = Hash::from_hex(&hex).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Hash::from_hex("abcd").is_err());
        assert!(Hash::from_hex("zz").is_err());
    }

    #[test]
    fn test_sha256_empty() {
        let hash = Hash::sha256(b"");
        assert_eq!(
            hash.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [0x07u8; 32];
        let hash = Hash::try_from(&bytes[..]).unwrap();
        assert_eq!(hash.as_bytes(), &bytes);

        assert!(Hash::try_from(&bytes[..31]).is_err());
    }

    #[test]
    fn test_hash_debug_and_display() {
        let hash = Hash::from_bytes([0xcd; 32]);
        assert_eq!(format!("{:?}", hash), "Hash(cdcdcdcdcdcdcdcd)");
        assert_eq!(format!("{}", hash), "cd".repeat(32));
    }

    #[test]
    fn test_bytes_in_equals_bytes_out() {
        let bytes = [0x3cu8; 32];
        let hash = Hash::from(bytes);
        assert_eq!(*hash.as_bytes(), bytes);
        assert_eq!(hash.as_ref(), &bytes[..]);
        assert_eq!(hash, Hash::from_bytes(bytes));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Hash::default(), Hash::ZERO);
    }
}
