//! Golden test vectors for deterministic verification.
//!
//! Every implementation of the entry format must produce identical encodings
//! and chain IDs for these inputs.

use factom_entry_core::{derive_chain_id, encode_entry, Entry, EntryBuilder, Hash};
use serde::{Deserialize, Serialize};

/// A golden test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: String,
    /// Entry version.
    pub version: u8,
    /// Chain ID (hex). Empty means "derive from the ExtIDs".
    pub chain_id: String,
    /// ExtIDs (hex each).
    pub ext_ids: Vec<String>,
    /// Content (hex).
    pub content: String,
    /// Expected chain ID derived from the ExtIDs (hex).
    pub expected_chain_id: String,
    /// Expected canonical encoding (hex).
    pub expected_bytes: String,
}

impl GoldenVector {
    fn new(
        name: &str,
        version: u8,
        chain_id: Option<[u8; 32]>,
        ext_ids: &[&[u8]],
        content: &[u8],
        expected_chain_id: &str,
        expected_bytes: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            version,
            chain_id: chain_id.map(hex::encode).unwrap_or_default(),
            ext_ids: ext_ids.iter().map(hex::encode).collect(),
            content: hex::encode(content),
            expected_chain_id: expected_chain_id.to_string(),
            expected_bytes: expected_bytes.to_string(),
        }
    }

    /// Build the entry this vector describes.
    ///
    /// Panics if the vector's hex fields are malformed.
    pub fn entry(&self) -> Entry {
        let ext_ids: Vec<Vec<u8>> = self
            .ext_ids
            .iter()
            .map(|x| hex::decode(x).expect("vector ExtID is hex"))
            .collect();

        let builder = EntryBuilder::new(Hash::ZERO)
            .version(self.version)
            .ext_ids(ext_ids)
            .content(hex::decode(&self.content).expect("vector content is hex"));

        if self.chain_id.is_empty() {
            builder.chain_from_ext_ids().build()
        } else {
            let mut entry = builder.build();
            entry.chain_id = Hash::from_hex(&self.chain_id).expect("vector chain_id is hex");
            entry
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector::new(
            "empty",
            0,
            Some([0x00; 32]),
            &[],
            b"",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "00000000000000000000000000000000000000000000000000000000000000000000\
             00",
        ),
        GoldenVector::new(
            "two_ext_ids_hello",
            0,
            Some([0x00; 32]),
            &[b"a", b"bc"],
            b"hello",
            "fa19a6c0df56998a0e234d9f4e324b43cd2b6101f7df6b8ecb0a162af63270a0",
            "00000000000000000000000000000000000000000000000000000000000000000000\
             070001610002626368656c6c6f",
        ),
        GoldenVector::new(
            "empty_ext_id",
            1,
            Some([0x11; 32]),
            &[b""],
            b"x",
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456",
            "01111111111111111111111111111111111111111111111111111111111111111100\
             02000078",
        ),
        GoldenVector::new(
            "binary_content",
            0,
            Some([0xaa; 32]),
            &[b"\x00\xff"],
            &(0u8..16).collect::<Vec<u8>>(),
            "63e16be7c46701e1275e7e5c79732685b824520343c51a86a7bb48a044878823",
            "00aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa00\
             04000200ff000102030405060708090a0b0c0d0e0f",
        ),
        GoldenVector::new(
            "chain_genesis",
            0,
            None,
            &[b"factom", b"entry", b"test"],
            b"genesis",
            "230d3fc9ddf052e0f3f6c3536a1eeecb6582c4bc984886314e9defab941ef346",
            "00230d3fc9ddf052e0f3f6c3536a1eeecb6582c4bc984886314e9defab941ef34600\
             150006666163746f6d0005656e74727900047465737467656e65736973",
        ),
    ]
}

/// Check every vector, returning (name, matches, actual encoding hex).
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let entry = v.entry();
            let encoded = encode_entry(&entry).map(hex::encode).unwrap_or_default();
            let chain_id = derive_chain_id(&entry.ext_ids).to_hex();

            let matches = encoded == v.expected_bytes && chain_id == v.expected_chain_id;
            (v.name.clone(), matches, encoded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, actual) in verify_all_vectors() {
            assert!(matches, "vector '{}' mismatched, got {}", name, actual);
        }
    }

    #[test]
    fn test_vectors_json_roundtrip() {
        let vectors = all_vectors();
        let json = serde_json::to_string_pretty(&vectors).unwrap();
        let parsed: Vec<GoldenVector> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), vectors.len());
        for (a, b) in parsed.iter().zip(&vectors) {
            assert_eq!(a.entry(), b.entry());
        }
    }

    #[test]
    fn test_genesis_vector_names_its_own_chain() {
        let vector = all_vectors()
            .into_iter()
            .find(|v| v.name == "chain_genesis")
            .unwrap();
        let entry = vector.entry();
        assert_eq!(entry.chain_id.to_hex(), vector.expected_chain_id);
    }
}
