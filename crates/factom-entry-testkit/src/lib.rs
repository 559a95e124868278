//! # Factom Entry Testkit
//!
//! Testing utilities for the entry codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known encodings and chain IDs for cross-implementation checks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helpers for building chains of entries, plus tracing setup
//!
//! ## Golden Vectors
//!
//! ```rust
//! use factom_entry_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let entry = vector.entry();
//!     let bytes = entry.encode().unwrap();
//!     assert_eq!(hex::encode(bytes), vector.expected_bytes);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use factom_entry_testkit::generators::{entry_from_params, EntryParams};
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(params: EntryParams) {
//!         let entry = entry_from_params(&params);
//!         let bytes = entry.encode().unwrap();
//!         prop_assert_eq!(factom_entry_core::decode_entry(&bytes).unwrap(), entry);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use factom_entry_testkit::fixtures::EntryFixture;
//!
//! let fixture = EntryFixture::default();
//! let genesis = fixture.make_genesis(b"initial data");
//! assert_eq!(genesis.chain_id, fixture.chain_id);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_test_tracing, EntryFixture};
pub use generators::{entry_from_params, EntryParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
