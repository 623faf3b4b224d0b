//! Record model and codec.
//!
//! Two representations live here:
//!
//! - [`VaultRecord`]: the plaintext credential record. Exists only in
//!   memory during a cipher call; never persisted in this form.
//! - [`EncodedRecord`]: the persisted representation, rendered as a single
//!   ASCII string `hex(salt):hex(iv):base64(ciphertext)`.
//!
//! The codec is strict in both directions: a record must carry all five
//! fields, and an encoded string must split into exactly three non-empty
//! segments with well-formed hex and base64. Violations are format errors,
//! never decryption errors.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::crypto::key::SALT_LENGTH;
use crate::error::{Result, VaultError};

/// Length of the CBC initialization vector in bytes (one AES block).
pub const IV_LENGTH: usize = 16;

/// A plaintext credential record.
///
/// The `password` field is the secret payload; the remaining fields are
/// metadata, but all five are encrypted together as one unit.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl fmt::Debug for VaultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultRecord")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("url", &self.url)
            .field("notes", &self.notes)
            .finish()
    }
}

/// Serialize a record to its canonical byte form (JSON).
///
/// Total over well-formed records; empty field values are fine.
pub fn to_bytes(record: &VaultRecord) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}

/// Deserialize a record from its canonical byte form.
///
/// # Errors
///
/// Returns `VaultError::Format` if the bytes are not valid JSON or any of
/// the five required fields is absent.
pub fn from_bytes(bytes: &[u8]) -> Result<VaultRecord> {
    Ok(serde_json::from_slice(bytes)?)
}

/// An encrypted record in its wire form.
///
/// Renders via `Display` as `hex(salt):hex(iv):base64(ciphertext)` and
/// parses back via `FromStr`. Each encrypt call produces a brand-new value
/// with fresh salt and IV; an `EncodedRecord` is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    salt: [u8; SALT_LENGTH],
    iv: [u8; IV_LENGTH],
    ciphertext: Vec<u8>,
}

impl EncodedRecord {
    pub(crate) fn from_parts(
        salt: [u8; SALT_LENGTH],
        iv: [u8; IV_LENGTH],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            salt,
            iv,
            ciphertext,
        }
    }

    pub(crate) fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    pub(crate) fn iv(&self) -> &[u8; IV_LENGTH] {
        &self.iv
    }

    pub(crate) fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            hex::encode(self.salt),
            hex::encode(self.iv),
            STANDARD.encode(&self.ciphertext)
        )
    }
}

impl FromStr for EncodedRecord {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(VaultError::Format(format!(
                "Expected 3 colon-separated segments, got {}",
                parts.len()
            )));
        }
        if parts.iter().any(|part| part.is_empty()) {
            return Err(VaultError::Format(
                "Encoded record has an empty segment".to_string(),
            ));
        }

        let salt = decode_hex_segment::<SALT_LENGTH>(parts[0], "salt")?;
        let iv = decode_hex_segment::<IV_LENGTH>(parts[1], "iv")?;
        let ciphertext = STANDARD
            .decode(parts[2])
            .map_err(|_| VaultError::Format("Invalid base64 in ciphertext segment".to_string()))?;

        Ok(Self {
            salt,
            iv,
            ciphertext,
        })
    }
}

fn decode_hex_segment<const N: usize>(segment: &str, name: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(segment)
        .map_err(|_| VaultError::Format(format!("Invalid hex in {} segment", name)))?;
    bytes
        .try_into()
        .map_err(|_| VaultError::Format(format!("{} segment must be {} bytes", name, N)))
}
