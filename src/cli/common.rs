//! Shared clap helper types for CLI commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use barcoder::{RenderConfig, Symbology};
use clap::{Args, ValueEnum};

/// Symbologies accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum SymbologyArg {
    Code39,
    #[default]
    Code128,
}

impl From<SymbologyArg> for Symbology {
    fn from(value: SymbologyArg) -> Symbology {
        match value {
            SymbologyArg::Code39 => Symbology::Code39,
            SymbologyArg::Code128 => Symbology::Code128,
        }
    }
}

/// Output formats for a single encoded value.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatArg {
    #[default]
    Svg,
    Png,
    #[value(name = "data-uri")]
    DataUri,
}

/// Styling flags shared by every encoding command.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// JSON render config (camelCase keys, all optional).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Narrow module width in pixels.
    #[arg(long)]
    pub module_width: Option<u32>,
    /// Quiet zone on each side, in modules.
    #[arg(long = "quiet-zone")]
    pub quiet_zone: Option<u32>,
    /// Bar height in pixels.
    #[arg(long)]
    pub height: Option<u32>,
    /// Background fill color.
    #[arg(long)]
    pub background: Option<String>,
    /// Bar fill color.
    #[arg(long)]
    pub bar_color: Option<String>,
    /// Code 39 wide/narrow ratio.
    #[arg(long)]
    pub wide_factor: Option<u32>,
}

impl RenderArgs {
    /// Load the config file, if any, then apply flag overrides.
    pub fn to_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str::<RenderConfig>(&raw)
                    .with_context(|| format!("invalid render config {}", path.display()))?
            }
            None => RenderConfig::default(),
        };
        if let Some(v) = self.module_width {
            config.module_width = v;
        }
        if let Some(v) = self.quiet_zone {
            config.quiet_zone_modules = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = &self.background {
            config.background_color = v.clone();
        }
        if let Some(v) = &self.bar_color {
            config.bar_color = v.clone();
        }
        if let Some(v) = self.wide_factor {
            config.wide_factor = v;
        }
        Ok(config)
    }
}
