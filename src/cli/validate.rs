//! Validation and character-set inspection (`barcode validate`, `barcode charset`).

use anyhow::{Result, anyhow};
use barcoder::Symbology;
use clap::Args;

use crate::cli::common::SymbologyArg;

/// Arguments for `barcode validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Value to check.
    pub value: String,
    /// Symbology to check against.
    #[arg(long, short = 's', value_enum, default_value_t = SymbologyArg::default())]
    pub symbology: SymbologyArg,
}

/// Arguments for `barcode charset`.
#[derive(Args, Debug)]
pub struct CharsetArgs {
    /// Symbology to describe.
    #[arg(long, short = 's', value_enum, default_value_t = SymbologyArg::default())]
    pub symbology: SymbologyArg,
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let symbology: Symbology = args.symbology.into();
    match barcoder::validate_value(symbology, &args.value) {
        Ok(normalized) => {
            println!("ok: {normalized}");
            Ok(())
        }
        Err(err) => Err(anyhow!("invalid {} value: {}", symbology, err)),
    }
}

pub fn charset(args: CharsetArgs) -> Result<()> {
    let symbology: Symbology = args.symbology.into();
    println!("{}", symbology.encoding().name());
    println!("{}", symbology.helper_text());
    println!("Max length: {}", barcoder::max_length(symbology));
    let chars: String = barcoder::supported_characters(symbology)
        .into_iter()
        .collect();
    println!("Characters: {chars}");
    Ok(())
}
