//! Account password policy.
//!
//! Runs before a password is accepted at account creation, independent of
//! the record cipher.

use crate::error::{Result, VaultError};

/// Minimum account password length in characters.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate a password against the account policy.
///
/// The documented floor is length-only: at least 6 characters and not
/// empty or only whitespace.
///
/// # Returns
///
/// Returns `Ok(())` if acceptable, or `VaultError::InvalidInput` with the
/// reason it was rejected.
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(VaultError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(VaultError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH,
            password.chars().count()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("abcdef").is_ok());
        assert!(validate_password("a much longer password").is_ok());
    }

    #[test]
    fn test_too_short_rejected() {
        let result = validate_password("abc");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 6 characters"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(validate_password("").is_err());
        assert!(validate_password("   ").is_err());
        assert!(validate_password("\n\t").is_err());
    }

    #[test]
    fn test_exactly_minimum_length_passes() {
        let exactly_6 = "123456";
        assert_eq!(exactly_6.len(), 6);
        assert!(validate_password(exactly_6).is_ok());
    }
}
