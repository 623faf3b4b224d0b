//! Output formatting for records.

use comfy_table::{presets, Table};
use owo_colors::OwoColorize;
use vault_core::storage::StoredRecord;
use vault_core::VaultRecord;

/// Print a success line.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Render the record listing as a table. Metadata only; the encoded data
/// stays out of the listing.
pub fn record_table(records: &[StoredRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Created", "Updated"]);
    for record in records {
        table.add_row(vec![
            record.id.to_string(),
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            record.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    table
}

/// Convert a stored record's metadata to JSON for output.
pub fn stored_record_json(record: &StoredRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "created_at": record.created_at,
        "updated_at": record.updated_at,
    })
}

/// Convert a decrypted record to JSON for output (includes the password).
pub fn record_json(record: &VaultRecord) -> serde_json::Value {
    serde_json::json!({
        "title": record.title,
        "username": record.username,
        "password": record.password,
        "url": record.url,
        "notes": record.notes,
    })
}

/// Print a decrypted record as labeled lines, masking the password unless
/// `reveal` is set.
pub fn print_record(record: &VaultRecord, reveal: bool) {
    println!("{}    {}", "Title:".bold(), record.title);
    println!("{} {}", "Username:".bold(), record.username);
    if reveal {
        println!("{} {}", "Password:".bold(), record.password);
    } else {
        println!("{} {}", "Password:".bold(), "********");
    }
    println!("{}      {}", "URL:".bold(), record.url);
    if !record.notes.is_empty() {
        println!("{}    {}", "Notes:".bold(), record.notes);
    }
}
