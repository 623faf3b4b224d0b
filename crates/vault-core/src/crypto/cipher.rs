//! The per-record cipher: AES-256-CBC under a passphrase-derived key.
//!
//! Encryption serializes the record, draws a fresh salt and IV from the OS
//! CSPRNG, derives a key, and produces an [`EncodedRecord`]. Decryption
//! re-derives the key from the embedded salt and reverses the process.
//!
//! The record format carries no authentication tag (see the module docs in
//! [`crate::crypto`]), so a padding failure is the primary corruption
//! signal. Every padding-level failure is collapsed into
//! [`VaultError::Decryption`] so a caller cannot tell a wrong passphrase
//! from corrupted ciphertext.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::crypto::key::{derive_key, KdfParams, SALT_LENGTH};
use crate::error::{Result, VaultError};
use crate::record::{self, EncodedRecord, VaultRecord, IV_LENGTH};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Record encryption and decryption.
///
/// Holds only KDF tuning; key material and passphrases are scoped to a
/// single call and never retained.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordCipher {
    kdf: KdfParams,
}

impl RecordCipher {
    pub fn new(kdf: KdfParams) -> Self {
        Self { kdf }
    }

    /// Encrypt a record under a passphrase.
    ///
    /// Draws a fresh 128-bit salt and IV per call, so two encryptions of
    /// the same record never produce the same output. The serialized
    /// plaintext and derived key are zeroized after use.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidInput` for an empty passphrase.
    pub fn encrypt(&self, record: &VaultRecord, passphrase: &str) -> Result<EncodedRecord> {
        let plaintext = Zeroizing::new(record::to_bytes(record)?);

        let mut salt = [0u8; SALT_LENGTH];
        let mut iv = [0u8; IV_LENGTH];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut iv);

        let key = derive_key(passphrase, &salt, &self.kdf)?;

        let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(&plaintext);

        Ok(EncodedRecord::from_parts(salt, iv, ciphertext))
    }

    /// Decrypt an encoded record with a passphrase.
    ///
    /// # Errors
    ///
    /// - `VaultError::Decryption` if the padding is invalid or the
    ///   ciphertext is not block-aligned; wrong passphrase and corrupted
    ///   data are indistinguishable here.
    /// - `VaultError::Format` if the decrypted bytes are not a valid
    ///   record encoding.
    pub fn decrypt(&self, encoded: &EncodedRecord, passphrase: &str) -> Result<VaultRecord> {
        let key = derive_key(passphrase, encoded.salt(), &self.kdf)?;

        let plaintext = Zeroizing::new(
            Aes256CbcDec::new(key.as_bytes().into(), encoded.iv().into())
                .decrypt_padded_vec_mut::<Pkcs7>(encoded.ciphertext())
                .map_err(|_| VaultError::Decryption)?,
        );

        record::from_bytes(&plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> VaultRecord {
        VaultRecord {
            title: "Gmail".to_string(),
            username: "a@b.com".to_string(),
            password: "Xk9!mP2q".to_string(),
            url: "gmail.com".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let cipher = RecordCipher::default();
        let record = sample_record();

        let encoded = cipher.encrypt(&record, "correcthorse").unwrap();
        let decrypted = cipher.decrypt(&encoded, "correcthorse").unwrap();

        assert_eq!(decrypted, record);
    }

    #[test]
    fn test_encrypt_is_nondeterministic() {
        let cipher = RecordCipher::default();
        let record = sample_record();

        let first = cipher.encrypt(&record, "correcthorse").unwrap();
        let second = cipher.encrypt(&record, "correcthorse").unwrap();

        // Fresh salt and IV each call: the encoded strings must differ,
        // but both must still decrypt to the same record.
        assert_ne!(first.to_string(), second.to_string());
        assert_eq!(cipher.decrypt(&first, "correcthorse").unwrap(), record);
        assert_eq!(cipher.decrypt(&second, "correcthorse").unwrap(), record);
    }

    #[test]
    fn test_wrong_passphrase_fails() {
        let cipher = RecordCipher::default();
        let encoded = cipher.encrypt(&sample_record(), "correcthorse").unwrap();

        assert!(cipher.decrypt(&encoded, "wrong").is_err());
    }

    #[test]
    fn test_truncated_ciphertext_is_decryption_error() {
        let cipher = RecordCipher::default();
        let encoded = cipher.encrypt(&sample_record(), "correcthorse").unwrap();

        let truncated = EncodedRecord::from_parts(
            *encoded.salt(),
            *encoded.iv(),
            encoded.ciphertext()[..encoded.ciphertext().len() - 1].to_vec(),
        );

        let result = cipher.decrypt(&truncated, "correcthorse");
        assert!(matches!(result, Err(VaultError::Decryption)));
    }

    #[test]
    fn test_encoded_output_parses_back() {
        let cipher = RecordCipher::default();
        let record = sample_record();

        let rendered = cipher.encrypt(&record, "correcthorse").unwrap().to_string();
        let parsed: EncodedRecord = rendered.parse().unwrap();

        assert_eq!(cipher.decrypt(&parsed, "correcthorse").unwrap(), record);
    }

    #[test]
    fn test_ciphertext_is_block_aligned() {
        let cipher = RecordCipher::default();
        let encoded = cipher.encrypt(&sample_record(), "correcthorse").unwrap();

        assert!(!encoded.ciphertext().is_empty());
        assert_eq!(encoded.ciphertext().len() % 16, 0);
    }

    #[test]
    fn test_empty_fields_round_trip() {
        let cipher = RecordCipher::default();
        let record = VaultRecord {
            title: String::new(),
            username: String::new(),
            password: String::new(),
            url: String::new(),
            notes: String::new(),
        };

        let encoded = cipher.encrypt(&record, "correcthorse").unwrap();
        assert_eq!(cipher.decrypt(&encoded, "correcthorse").unwrap(), record);
    }

    #[test]
    fn test_empty_passphrase_rejected() {
        let cipher = RecordCipher::default();
        let result = cipher.encrypt(&sample_record(), "");
        assert!(matches!(result, Err(VaultError::InvalidInput(_))));
    }

    #[test]
    fn test_ciphertext_does_not_contain_plaintext() {
        let cipher = RecordCipher::default();
        let mut record = sample_record();
        record.notes = "PLAINTEXT_MARKER_123".to_string();

        let rendered = cipher.encrypt(&record, "correcthorse").unwrap().to_string();
        assert!(!rendered.contains("PLAINTEXT_MARKER_123"));
    }

    #[test]
    fn test_custom_iterations_round_trip() {
        let cipher = RecordCipher::new(KdfParams { iterations: 50_000 });
        let record = sample_record();

        let encoded = cipher.encrypt(&record, "correcthorse").unwrap();
        assert_eq!(cipher.decrypt(&encoded, "correcthorse").unwrap(), record);

        // A cipher configured with a different work factor derives a
        // different key and cannot unlock the record.
        let mismatched = RecordCipher::default();
        assert!(mismatched.decrypt(&encoded, "correcthorse").is_err());
    }
}
