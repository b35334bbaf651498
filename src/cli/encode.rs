//! Single-value encoding (`barcode encode ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use barcoder::{Barcoder, Symbology, render_png};
use clap::Args;
use image::ImageFormat;
use log::info;

use crate::cli::common::{FormatArg, RenderArgs, SymbologyArg};
use crate::cli::utils::write_output;

/// Arguments for `barcode encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Value to encode.
    pub value: String,
    /// Symbology to use.
    #[arg(long, short = 's', value_enum, default_value_t = SymbologyArg::default())]
    pub symbology: SymbologyArg,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::default())]
    pub format: FormatArg,
    /// Write to this path instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub render: RenderArgs,
}

/// Execute an encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let symbology: Symbology = args.symbology.into();
    let config = args.render.to_config()?;
    if args.format == FormatArg::Png && args.output.is_none() {
        anyhow::bail!("PNG output needs --output <path>");
    }
    let encoder = Barcoder::default();
    let encoded = encoder
        .encode_to_image(symbology, &args.value, &config)
        .with_context(|| format!("cannot encode {:?} as {}", args.value, symbology))?;

    let bytes = match args.format {
        FormatArg::Svg => encoded.svg.into_bytes(),
        FormatArg::DataUri => encoded.image.into_bytes(),
        FormatArg::Png => {
            let symbol = barcoder::encode(symbology, &args.value, &config)?;
            let img = render_png(&symbol)?;
            let mut buf = std::io::Cursor::new(Vec::new());
            img.write_to(&mut buf, ImageFormat::Png)
                .context("failed to encode PNG")?;
            buf.into_inner()
        }
    };

    match args.output {
        Some(path) => {
            write_output(&path, &bytes)?;
            info!("wrote {} bytes to {}", bytes.len(), path.display());
            println!(
                "Encoded {} as {} ({}x{}) to {}",
                encoded.value,
                symbology,
                encoded.width,
                encoded.height,
                path.display()
            );
        }
        None => {
            println!("{}", String::from_utf8_lossy(&bytes));
        }
    }
    Ok(())
}
