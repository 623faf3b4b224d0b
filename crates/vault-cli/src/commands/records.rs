//! Record command handlers: add, list, show, edit, rm.

use anyhow::bail;
use secrecy::ExposeSecret;
use vault_core::generator::{self, GeneratorOptions};
use vault_core::storage::RecordStore;
use vault_core::{EncodedRecord, RecordCipher, VaultRecord};

use super::{field_value, open_store, parse_record_id};
use crate::cli::{AddArgs, Cli, EditArgs, ListArgs, RmArgs, ShowArgs};
use crate::output;
use crate::passphrase::obtain_passphrase;

pub fn handle_add(cli: &Cli, args: &AddArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;

    let password = if args.generate {
        generator::validate_length(args.length)?;
        generator::generate(&GeneratorOptions {
            length: args.length,
            include_numbers: !args.no_numbers,
            include_symbols: !args.no_symbols,
            exclude_look_alikes: !args.allow_look_alikes,
        })?
    } else {
        field_value(args.password.clone(), "Password", args.no_input)?
    };

    let record = VaultRecord {
        title: field_value(args.title.clone(), "Title", args.no_input)?,
        username: field_value(args.username.clone(), "Username", args.no_input)?,
        password,
        url: field_value(args.url.clone(), "URL", args.no_input)?,
        notes: field_value(args.notes.clone(), "Notes", args.no_input)?,
    };

    let passphrase = obtain_passphrase(false)?;
    let encoded = RecordCipher::default().encrypt(&record, passphrase.expose_secret())?;

    let owner = store.owner_id();
    let id = store.create(owner, &encoded.to_string())?;
    output::success(&format!("Added record {}", id));
    Ok(())
}

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;
    let records = store.list(store.owner_id())?;

    if args.json {
        let items: Vec<serde_json::Value> =
            records.iter().map(output::stored_record_json).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }
    println!("{}", output::record_table(&records));
    Ok(())
}

pub fn handle_show(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;
    let id = parse_record_id(&args.id)?;

    let Some(stored) = store.get(id, store.owner_id())? else {
        bail!("Record {} not found", id);
    };

    let encoded: EncodedRecord = stored.encoded_data.parse()?;
    let passphrase = obtain_passphrase(false)?;
    let record = RecordCipher::default().decrypt(&encoded, passphrase.expose_secret())?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::record_json(&record))?
        );
    } else {
        output::print_record(&record, args.reveal);
    }
    Ok(())
}

pub fn handle_edit(cli: &Cli, args: &EditArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;
    let id = parse_record_id(&args.id)?;
    let owner = store.owner_id();

    let Some(stored) = store.get(id, owner)? else {
        bail!("Record {} not found", id);
    };

    let encoded: EncodedRecord = stored.encoded_data.parse()?;
    let passphrase = obtain_passphrase(false)?;
    let cipher = RecordCipher::default();
    let mut record = cipher.decrypt(&encoded, passphrase.expose_secret())?;

    if let Some(title) = &args.title {
        record.title = title.clone();
    }
    if let Some(username) = &args.username {
        record.username = username.clone();
    }
    if let Some(password) = &args.password {
        record.password = password.clone();
    }
    if let Some(url) = &args.url {
        record.url = url.clone();
    }
    if let Some(notes) = &args.notes {
        record.notes = notes.clone();
    }

    // Re-encrypting draws a fresh salt and IV; the stored string is
    // replaced wholesale, never patched.
    let re_encoded = cipher.encrypt(&record, passphrase.expose_secret())?;
    if !store.update(id, owner, &re_encoded.to_string())? {
        bail!("Record {} not found", id);
    }

    output::success(&format!("Updated record {}", id));
    Ok(())
}

pub fn handle_rm(cli: &Cli, args: &RmArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;
    let id = parse_record_id(&args.id)?;

    if !store.delete(id, store.owner_id())? {
        bail!("Record {} not found", id);
    }
    output::success(&format!("Removed record {}", id));
    Ok(())
}
