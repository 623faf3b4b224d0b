//! Standalone password generation.

use vault_core::generator::{self, GeneratorOptions};

use crate::cli::GenerateArgs;

pub fn handle_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    generator::validate_length(args.length)?;

    let password = generator::generate(&GeneratorOptions {
        length: args.length,
        include_numbers: !args.no_numbers,
        include_symbols: !args.no_symbols,
        exclude_look_alikes: !args.allow_look_alikes,
    })?;

    // Bare value on stdout so it can be piped.
    println!("{}", password);
    Ok(())
}
