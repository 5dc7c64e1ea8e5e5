//! fillfile CLI
//!
//! Writes a requested number of copies of a fill byte to a file, creating or
//! truncating it. The size and value arguments accept decimal, `0x` hex, and
//! leading-`0` octal literals.

use anyhow::Context;
use clap::Parser;
use fillfile::{literal, FillRequest};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fillfile", version)]
#[command(about = "Generate a binary test file filled with a repeated byte")]
struct Args {
    /// Output file path (created or overwritten; parent directory must exist)
    filename: PathBuf,

    /// Number of bytes to write (decimal, 0x hex, or 0-prefixed octal)
    #[arg(value_parser = parse_size)]
    size: u64,

    /// Fill byte, low 8 bits used (decimal, 0x hex, or 0-prefixed octal);
    /// signed literals wrap modulo 256, so -1 fills with 0xFF
    //
    // allow_hyphen_values: signed literals like "-1" and "-0x10" are valid
    // values here, not flags; they must reach parse_value intact.
    #[arg(value_parser = parse_value, default_value = "0xe4", allow_hyphen_values = true)]
    value: u8,
}

/// Parse the size argument as a non-negative integer literal
fn parse_size(s: &str) -> Result<u64, String> {
    literal::parse_length(s).map_err(|e| e.to_string())
}

/// Parse the value argument and reduce it to its low 8 bits
fn parse_value(s: &str) -> Result<u8, String> {
    literal::parse_fill_byte(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG enables them;
    // a successful run produces no output.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!(
        "writing {} bytes of 0x{:02X} to {:?}",
        args.size, args.value, args.filename
    );

    let request = FillRequest::with_byte(&args.filename, args.size, args.value);
    request
        .write()
        .with_context(|| format!("cannot write fill file {:?}", args.filename))?;

    Ok(())
}
