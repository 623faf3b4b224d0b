//! Cryptographic operations for Vault.
//!
//! This module provides key derivation and the per-record cipher:
//! - **PBKDF2-HMAC-SHA256**: passphrase-based key derivation
//! - **AES-256-CBC**: record encryption with PKCS#7 padding
//!
//! ## Security Model
//!
//! - Every encrypt call draws a fresh 128-bit salt and IV from the OS
//!   CSPRNG, so identical records never produce identical ciphertext.
//! - The derived key lives only for the duration of one cipher operation
//!   and is zeroized from memory on drop.
//! - No plaintext or passphrase is ever persisted.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the encrypted record store
//! - Offline brute-force attacks on the passphrase (rate-limited by the KDF
//!   work factor, which is configurable and defaults to a modest value)
//!
//! We do NOT defend against:
//! - Ciphertext tampering: the record format carries no authentication tag,
//!   so corruption is only detected indirectly (padding or structure checks)
//! - Compromised OS / keylogger
//! - Access to an unlocked session / memory

pub mod cipher;
pub mod key;

pub use cipher::RecordCipher;
pub use key::{derive_key, DerivedKey, KdfParams};
