//! # Vault Core
//!
//! Core library for Vault - a per-record encrypted credential store.
//!
//! This crate provides the cryptographic core, record codec, password
//! tooling, and storage abstractions independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: key derivation and the record cipher
//! - **record**: plaintext record model and the encoded wire format
//! - **generator**: charset building and password generation
//! - **policy**: account password policy
//! - **storage**: record store trait and implementations
//!
//! ## Security Model
//!
//! Every record is encrypted independently under a key derived from the
//! owner's passphrase with a fresh random salt, so the store only ever
//! holds ciphertext. Neither the passphrase nor derived key material is
//! persisted anywhere.

pub mod crypto;
pub mod error;
pub mod fs;
pub mod generator;
pub mod policy;
pub mod record;
pub mod storage;

pub use crypto::{derive_key, DerivedKey, KdfParams, RecordCipher};
pub use error::{Result, VaultError};
pub use record::{EncodedRecord, VaultRecord};
pub use storage::RecordStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
