//! Proptest generators for property-based testing.

use bytes::Bytes;
use proptest::prelude::*;

use factom_entry_core::{Entry, EntryBuilder, Hash};

/// Generate a random Hash.
pub fn hash() -> impl Strategy<Value = Hash> {
    any::<[u8; 32]>().prop_map(Hash::from_bytes)
}

/// Generate a single ExtID of at most `max_len` bytes.
pub fn ext_id(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate up to `max_count` ExtIDs, each at most `max_len` bytes.
pub fn ext_ids(max_count: usize, max_len: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(ext_id(max_len), 0..=max_count)
}

/// Generate up to three ExtIDs, some of them tens of kilobytes long.
///
/// Blocks land on both sides of the 32767 and 65535 byte size limits.
pub fn large_ext_ids() -> impl Strategy<Value = Vec<Vec<u8>>> {
    let item = prop_oneof![
        ext_id(16),
        (8_000usize..=40_000, any::<u8>()).prop_map(|(len, fill)| vec![fill; len]),
    ];
    prop::collection::vec(item, 0..=3)
}

/// Generate content bytes of at most `max_len` bytes.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Parameters for generating an entry.
#[derive(Debug, Clone)]
pub struct EntryParams {
    pub version: u8,
    pub chain_id: Hash,
    pub ext_ids: Vec<Vec<u8>>,
    pub content: Vec<u8>,
}

impl Arbitrary for EntryParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<u8>(), hash(), ext_ids(8, 64), content(1000))
            .prop_map(|(version, chain_id, ext_ids, content)| EntryParams {
                version,
                chain_id,
                ext_ids,
                content,
            })
            .boxed()
    }
}

/// Generate an entry from parameters.
pub fn entry_from_params(params: &EntryParams) -> Entry {
    EntryBuilder::new(params.chain_id)
        .version(params.version)
        .ext_ids(params.ext_ids.iter().cloned().map(Bytes::from))
        .content(params.content.clone())
        .build()
}

/// Generate a random encodable entry.
pub fn entry() -> impl Strategy<Value = Entry> {
    any::<EntryParams>().prop_map(|p| entry_from_params(&p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use factom_entry_core::{
        decode_entry, derive_chain_id, encode_entry, EntryError, HEADER_SIZE,
    };

    proptest! {
        #[test]
        fn test_roundtrip(params: EntryParams) {
            let entry = entry_from_params(&params);
            let bytes = encode_entry(&entry).unwrap();
            let decoded = decode_entry(&bytes).unwrap();

            prop_assert_eq!(decoded, entry);
        }

        #[test]
        fn test_encoded_len_matches(entry in entry()) {
            let bytes = encode_entry(&entry).unwrap();
            prop_assert_eq!(bytes.len(), entry.encoded_len());
        }

        #[test]
        fn test_chain_id_deterministic(ids in ext_ids(8, 64)) {
            prop_assert_eq!(derive_chain_id(&ids), derive_chain_id(&ids));
        }

        #[test]
        fn test_chain_id_order_sensitive(a in ext_id(32), b in ext_id(32)) {
            prop_assume!(a != b);

            let ab = derive_chain_id(&[a.clone(), b.clone()]);
            let ba = derive_chain_id(&[b, a]);
            prop_assert_ne!(ab, ba);
        }

        #[test]
        fn test_short_input_is_truncated(entry in entry(), cut in 0usize..HEADER_SIZE) {
            let bytes = encode_entry(&entry).unwrap();
            let is_truncated = matches!(
                decode_entry(&bytes[..cut]),
                Err(EntryError::TruncatedInput { .. })
            );
            prop_assert!(is_truncated);
        }

        #[test]
        fn test_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = decode_entry(&bytes);
        }
    }
}
