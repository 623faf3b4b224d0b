//! Vault CLI - a per-record encrypted credential store.
//!
//! This is the boundary layer: it validates input, obtains a passphrase,
//! calls the core, and renders the outcome. All cryptography lives in
//! `vault-core`.

mod cli;
mod commands;
mod output;
mod passphrase;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init => commands::init::handle_init(cli),
        Commands::Add(args) => commands::records::handle_add(cli, args),
        Commands::List(args) => commands::records::handle_list(cli, args),
        Commands::Show(args) => commands::records::handle_show(cli, args),
        Commands::Edit(args) => commands::records::handle_edit(cli, args),
        Commands::Rm(args) => commands::records::handle_rm(cli, args),
        Commands::Generate(args) => commands::generate::handle_generate(args),
    }
}
