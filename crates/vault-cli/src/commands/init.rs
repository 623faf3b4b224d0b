//! Vault creation.

use std::path::Path;

use secrecy::ExposeSecret;
use vault_core::policy::validate_password;
use vault_core::storage::JsonFileStore;

use crate::cli::Cli;
use crate::output;
use crate::passphrase::obtain_passphrase;

pub fn handle_init(cli: &Cli) -> anyhow::Result<()> {
    let path = Path::new(&cli.vault);

    // The passphrase is policy-checked up front but never stored; it will
    // be asked for again on every encrypt/decrypt.
    let passphrase = obtain_passphrase(true)?;
    validate_password(passphrase.expose_secret())?;

    let store = JsonFileStore::create(path)?;
    output::success(&format!(
        "Created vault at {} (owner {})",
        path.display(),
        store.owner_id()
    ));
    Ok(())
}
