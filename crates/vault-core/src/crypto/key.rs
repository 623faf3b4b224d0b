//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module derives encryption keys from passphrases. The derivation is
//! deterministic over (passphrase, salt, iterations), which is what allows
//! a record to be decrypted later from its embedded salt.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{Result, VaultError};

/// Length of the random salt in bytes (128 bits).
pub const SALT_LENGTH: usize = 16;

/// Length of the derived key in bytes (256 bits, AES-256).
pub const KEY_LENGTH: usize = 32;

/// Default PBKDF2 iteration count.
///
/// This matches the deployed record format and is below current OWASP
/// recommendations; raising it is a deployment decision because every
/// existing record was derived with the count in effect when it was
/// encrypted, and the encoded format does not embed it.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// PBKDF2 tuning parameters.
///
/// Iterations are centralized here rather than hard-coded at call sites so
/// a deployment can raise the work factor in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// A cryptographic key derived from a passphrase.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped, reducing the window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher
    /// operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase using PBKDF2-HMAC-SHA256.
///
/// # Arguments
///
/// * `passphrase` - The passphrase to derive from
/// * `salt` - Random salt (must be unique per record, stored with it)
/// * `params` - Iteration count; both sides of a record's lifecycle must
///   agree on it because the encoded format does not embed it
///
/// # Security
///
/// - Same passphrase + salt + iterations always produces the same key
/// - Different salt produces a different key for the same passphrase
///
/// # Errors
///
/// Returns `VaultError::InvalidInput` if the passphrase is empty or the
/// salt is shorter than [`SALT_LENGTH`]. Well-formed inputs always succeed.
pub fn derive_key(passphrase: &str, salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(VaultError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    if salt.len() < SALT_LENGTH {
        return Err(VaultError::InvalidInput(format!(
            "Salt must be at least {} bytes",
            SALT_LENGTH
        )));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(
        passphrase.as_bytes(),
        salt,
        params.iterations,
        &mut key_bytes,
    );

    Ok(DerivedKey::from_bytes(key_bytes))
}
