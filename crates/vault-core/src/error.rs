//! Error types for Vault core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Core error type for Vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Malformed encoded record, bad hex/base64, or bad serialized structure
    #[error("Format error: {0}")]
    Format(String),

    /// Wrong passphrase or corrupted ciphertext.
    ///
    /// Deliberately carries no detail: the two causes must stay
    /// indistinguishable to the caller.
    #[error("Cannot decrypt record: wrong passphrase or corrupted data")]
    Decryption,

    /// Invalid generation parameters
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Format(err.to_string())
    }
}
