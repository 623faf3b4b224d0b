//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

use vault_core::VERSION;

/// Vault - a per-record encrypted credential store
#[derive(Parser)]
#[command(name = "vault")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault file
    #[arg(
        short,
        long,
        global = true,
        env = "VAULT_PATH",
        default_value = "vault.json"
    )]
    pub vault: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new vault file
    Init,

    /// Add a new credential record
    Add(AddArgs),

    /// List records (metadata only, never decrypts)
    List(ListArgs),

    /// Decrypt and display a record
    Show(ShowArgs),

    /// Edit a record: decrypt, apply changes, re-encrypt
    Edit(EditArgs),

    /// Delete a record
    Rm(RmArgs),

    /// Generate a password
    Generate(GenerateArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Record title
    #[arg(long)]
    pub title: Option<String>,

    /// Username or login
    #[arg(long)]
    pub username: Option<String>,

    /// Password (omit to be prompted, or use --generate)
    #[arg(long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Site URL
    #[arg(long)]
    pub url: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Generate the password instead of providing one
    #[arg(long)]
    pub generate: bool,

    /// Generated password length
    #[arg(long, default_value_t = 16)]
    pub length: usize,

    /// Exclude digits from the generated password
    #[arg(long)]
    pub no_numbers: bool,

    /// Exclude symbols from the generated password
    #[arg(long)]
    pub no_symbols: bool,

    /// Keep look-alike characters (0, O, 1, l, I)
    #[arg(long)]
    pub allow_look_alikes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Record ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print the password instead of masking it
    #[arg(long)]
    pub reveal: bool,

    /// Output as JSON (includes the password)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Record ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New username
    #[arg(long)]
    pub username: Option<String>,

    /// New password
    #[arg(long)]
    pub password: Option<String>,

    /// New URL
    #[arg(long)]
    pub url: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Args)]
pub struct RmArgs {
    /// Record ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Password length (4-128)
    #[arg(long, default_value_t = 16)]
    pub length: usize,

    /// Exclude digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Keep look-alike characters (0, O, 1, l, I)
    #[arg(long)]
    pub allow_look_alikes: bool,
}
