//! Multi-line encoding (`barcode batch ...`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use barcoder::{Barcoder, BatchOptions, Symbology};
use clap::Args;
use log::info;

use crate::cli::common::{RenderArgs, SymbologyArg};
use crate::cli::utils::{read_text_arg, sanitize_file_name, write_output};

/// Arguments for `barcode batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input text, one value per line (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Symbology to use.
    #[arg(long, short = 's', value_enum, default_value_t = SymbologyArg::default())]
    pub symbology: SymbologyArg,
    /// Directory receiving one SVG per encoded line.
    #[arg(long = "out-dir")]
    pub out_dir: Option<PathBuf>,
    /// Report line errors even when no line could be encoded.
    #[arg(long)]
    pub include_errors: bool,
    /// Print the batch result as JSON.
    #[arg(long)]
    pub json: bool,
    /// Exit with an error status when any line fails.
    #[arg(long)]
    pub strict: bool,
    #[command(flatten)]
    pub render: RenderArgs,
}

/// Execute a batch command.
pub fn handle(args: BatchArgs) -> Result<()> {
    let symbology: Symbology = args.symbology.into();
    let config = args.render.to_config()?;
    let input = read_text_arg(args.text.clone(), args.from.clone())?;
    let encoder = Barcoder::default();
    let result = encoder.encode_batch(
        symbology,
        &input,
        &config,
        BatchOptions {
            include_errors_with_results: args.include_errors,
        },
    );

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        for code in &result.codes {
            let target = dir.join(sanitize_file_name(&code.suggested_file_name));
            let svg = barcoder::from_inline_image(&code.image, encoder.codec())?;
            write_output(&target, svg.as_bytes())?;
            info!("wrote {}", target.display());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for code in &result.codes {
            println!("{}\t{}", code.value, code.suggested_file_name);
        }
        if let Some(dir) = &args.out_dir {
            println!(
                "Encoded {} code(s) as {} into {}",
                result.codes.len(),
                symbology,
                dir.display()
            );
        }
    }
    for err in &result.errors {
        eprintln!("{err}");
    }

    if args.strict && !result.errors.is_empty() {
        return Err(anyhow!("{} line(s) failed to encode", result.errors.len()));
    }
    Ok(())
}
