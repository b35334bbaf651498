//! Command-line interface wiring for the `barcode` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

pub mod batch;
pub mod common;
pub mod encode;
pub mod logging;
pub mod utils;
pub mod validate;

/// Parsed CLI entrypoint for the `barcode` binary.
#[derive(Parser, Debug)]
#[command(name = "barcode", version, about = "Code 39 / Code 128 barcode generator")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level command families made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode one value into an SVG, PNG or data URI.
    Encode(encode::EncodeArgs),
    /// Encode every line of a text input.
    Batch(batch::BatchArgs),
    /// Check a value without encoding it.
    Validate(validate::ValidateArgs),
    /// Show the accepted characters and maximum length.
    Charset(validate::CharsetArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::Batch(args) => batch::handle(args),
        Command::Validate(args) => validate::validate(args),
        Command::Charset(args) => validate::charset(args),
    }
}
