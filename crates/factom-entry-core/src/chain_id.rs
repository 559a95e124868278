//! Chain ID derivation from an ordered list of ExtIDs.
//!
//! `chain_id = SHA256(SHA256(ext_ids[0]) || SHA256(ext_ids[1]) || ...)`
//!
//! Only the per-ExtID digests enter the outer hash, never the raw ExtID bytes.

use sha2::{Digest, Sha256};

use crate::hash::Hash;

/// Derive a chain ID from ExtIDs, in order.
///
/// An empty list yields `SHA256("")`.
pub fn derive_chain_id<T: AsRef<[u8]>>(ext_ids: &[T]) -> Hash {
    let mut hasher = Sha256::new();
    for ext_id in ext_ids {
        hasher.update(Sha256::digest(ext_id.as_ref()));
    }
    let id = Hash::from_bytes(hasher.finalize().into());
    tracing::trace!(ext_ids = ext_ids.len(), chain_id = %id, "derived chain id");
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_sha256_of_nothing() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(derive_chain_id(&empty), Hash::sha256(b""));
    }

    #[test]
    fn test_matches_manual_construction() {
        let a = Hash::sha256(b"a");
        let bc = Hash::sha256(b"bc");

        let mut concat = Vec::new();
        concat.extend_from_slice(a.as_bytes());
        concat.extend_from_slice(bc.as_bytes());

        assert_eq!(derive_chain_id(&[b"a".as_slice(), b"bc"]), Hash::sha256(&concat));
    }

    #[test]
    fn test_single_ext_id_is_double_hash() {
        let inner = Hash::sha256(b"factom");
        assert_eq!(derive_chain_id(&[b"factom"]), Hash::sha256(inner.as_bytes()));
    }

    #[test]
    fn test_order_sensitive() {
        let ab = derive_chain_id(&[b"a".as_slice(), b"b"]);
        let ba = derive_chain_id(&[b"b".as_slice(), b"a"]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_not_a_hash_of_raw_concatenation() {
        // ["ab"] and ["a", "b"] share raw bytes but not digests.
        assert_ne!(
            derive_chain_id(&[b"ab".as_slice()]),
            derive_chain_id(&[b"a".as_slice(), b"b"])
        );
    }

    #[test]
    fn test_empty_ext_id_contributes() {
        let none: [&[u8]; 0] = [];
        assert_ne!(derive_chain_id(&[b"".as_slice()]), derive_chain_id(&none));
    }
}
