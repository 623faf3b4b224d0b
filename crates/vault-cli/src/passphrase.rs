//! Passphrase acquisition.
//!
//! The passphrase comes from the `VAULT_PASSPHRASE` environment variable
//! when set (scripting, tests), otherwise from an interactive hidden
//! prompt. It is held as a [`SecretString`] so it is zeroized on drop and
//! never printed by accident.

use std::io::IsTerminal;

use anyhow::{bail, Context};
use dialoguer::Password;
use secrecy::SecretString;

/// Environment variable consulted before prompting.
pub const PASSPHRASE_ENV: &str = "VAULT_PASSPHRASE";

/// Obtain the vault passphrase.
///
/// `confirm` asks for the passphrase twice (used when creating a vault);
/// the confirmation is skipped when the passphrase comes from the
/// environment.
pub fn obtain_passphrase(confirm: bool) -> anyhow::Result<SecretString> {
    if let Ok(value) = std::env::var(PASSPHRASE_ENV) {
        if !value.is_empty() {
            return Ok(SecretString::from(value));
        }
    }

    if !std::io::stdin().is_terminal() {
        bail!(
            "No passphrase available: set {} or run interactively",
            PASSPHRASE_ENV
        );
    }

    let prompt = Password::new().with_prompt("Passphrase");
    let prompt = if confirm {
        prompt.with_confirmation("Confirm passphrase", "Passphrases do not match")
    } else {
        prompt
    };

    let value = prompt.interact().context("Failed to read passphrase")?;
    Ok(SecretString::from(value))
}
