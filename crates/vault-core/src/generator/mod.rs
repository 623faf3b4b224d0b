//! Password generation.
//!
//! Samples each character independently and uniformly from an alphabet
//! built by [`charset`]. Generated passwords are real secrets, so the
//! randomness source is the OS CSPRNG, never a statistical generator.

pub mod charset;

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// Minimum accepted password length at the boundary.
pub const MIN_LENGTH: usize = 4;

/// Maximum accepted password length at the boundary.
pub const MAX_LENGTH: usize = 128;

/// Options controlling password generation.
///
/// Serialized in camelCase because this shape crosses the external
/// boundary as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_look_alikes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_numbers: true,
            include_symbols: true,
            exclude_look_alikes: true,
        }
    }
}

/// Validate a requested length against the boundary limits.
///
/// The generator itself only requires a positive length; the [4, 128]
/// window is the boundary contract and callers enforce it before
/// generating.
pub fn validate_length(length: usize) -> Result<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(VaultError::Configuration(format!(
            "Password length must be between {} and {} characters",
            MIN_LENGTH, MAX_LENGTH
        )));
    }
    Ok(())
}

/// Generate a password.
///
/// Each character is drawn independently and uniformly from the working
/// alphabet using the OS CSPRNG.
///
/// # Errors
///
/// Returns `VaultError::Configuration` for a zero length or an empty
/// alphabet. The alphabet cannot actually end up empty (letters are always
/// included), but the check stays as a guard against future charset rules.
pub fn generate(options: &GeneratorOptions) -> Result<String> {
    if options.length == 0 {
        return Err(VaultError::Configuration(
            "Password length must be positive".to_string(),
        ));
    }

    let alphabet = charset::build(options);
    if alphabet.is_empty() {
        return Err(VaultError::Configuration(
            "Character set is empty".to_string(),
        ));
    }

    let mut rng = OsRng;
    let mut password = String::with_capacity(options.length);
    for _ in 0..options.length {
        // gen_range is uniform; OsRng is the OS CSPRNG.
        let idx = rng.gen_range(0..alphabet.len());
        password.push(alphabet[idx]);
    }

    Ok(password)
}
