//! Command handlers.

pub mod generate;
pub mod init;
pub mod records;

use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use dialoguer::Input;
use uuid::Uuid;
use vault_core::storage::JsonFileStore;

use crate::cli::Cli;

/// Open the vault file named by the CLI arguments.
fn open_store(cli: &Cli) -> anyhow::Result<JsonFileStore> {
    JsonFileStore::open(Path::new(&cli.vault))
        .with_context(|| format!("Could not open vault '{}' (run `vault init`?)", cli.vault))
}

/// Parse a record ID argument.
fn parse_record_id(id: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("'{}' is not a valid record ID", id))
}

/// Resolve a record field: flag value if given, interactive prompt when
/// possible, empty string otherwise. All five fields may legitimately be
/// empty.
fn field_value(flag: Option<String>, label: &str, no_input: bool) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if no_input || !std::io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let value = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", label))?;
    Ok(value)
}
