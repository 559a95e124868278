//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Once;

use bytes::Bytes;
use rand::{Rng, RngCore};

use factom_entry_core::{Entry, EntryBuilder, Hash};

/// A test fixture for one chain: its genesis ExtIDs and the derived chain ID.
pub struct EntryFixture {
    pub ext_ids: Vec<Bytes>,
    pub chain_id: Hash,
}

impl EntryFixture {
    /// Create a fixture for a chain named by the given ExtIDs.
    pub fn new<I, T>(ext_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bytes>,
    {
        let genesis = Entry::new_chain(ext_ids, Bytes::new());
        Self {
            chain_id: genesis.chain_id,
            ext_ids: genesis.ext_ids,
        }
    }

    /// Create a fixture with random ExtIDs.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(1..=4);
        Self::new((0..count).map(|_| random_bytes(&mut rng, 32)))
    }

    /// The first entry of the chain.
    pub fn make_genesis(&self, content: &[u8]) -> Entry {
        Entry::new_chain(self.ext_ids.clone(), content.to_vec())
    }

    /// A follow-up entry in the chain.
    pub fn make_entry(&self, ext_ids: &[&[u8]], content: &[u8]) -> Entry {
        EntryBuilder::new(self.chain_id)
            .ext_ids(ext_ids.iter().map(|x| x.to_vec()))
            .content(content.to_vec())
            .build()
    }

    /// A follow-up entry with random ExtIDs and content.
    pub fn make_random_entry(&self) -> Entry {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(0..=4);
        let ext_ids: Vec<Vec<u8>> = (0..count).map(|_| random_bytes(&mut rng, 64)).collect();
        let content = random_bytes(&mut rng, 1024);

        EntryBuilder::new(self.chain_id)
            .ext_ids(ext_ids)
            .content(content)
            .build()
    }
}

impl Default for EntryFixture {
    fn default() -> Self {
        Self::new([&b"test"[..], &b"chain"[..]])
    }
}

fn random_bytes(rng: &mut impl RngCore, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

static TRACING: Once = Once::new();

/// Install a tracing subscriber for tests.
///
/// Honors `RUST_LOG`; defaults to `warn`. Safe to call more than once.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
