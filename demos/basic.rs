//! Basic fillfile usage example
//!
//! Demonstrates the core functionality:
//! - Generating a file with the default fill pattern
//! - Generating a file with an explicit fill byte
//! - Whole-file overwrite semantics (re-running truncates)
//!
//! Run with: cargo run --example basic

use fillfile::{generate, FillRequest, DEFAULT_FILL_BYTE};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== fillfile Basic Usage ===\n");

    let dir = std::env::temp_dir().join("fillfile-basic-example");
    fs::create_dir_all(&dir)?;

    // Default pattern: 0xE4 packs the W/G/B/R channels at 2 bits each
    println!("1. Writing 16 bytes of the default pattern (0x{:02X})...", DEFAULT_FILL_BYTE);
    let pattern = dir.join("pattern.bin");
    FillRequest::new(&pattern, 16).write()?;
    println!("   ✓ {} -> {:02X?}", pattern.display(), fs::read(&pattern)?);
    println!();

    // Explicit fill byte
    println!("2. Writing 4 bytes of 0xAB...");
    let fixture = dir.join("fixture.bin");
    generate(&fixture, 4, 0xAB)?;
    println!("   ✓ {} -> {:02X?}", fixture.display(), fs::read(&fixture)?);
    println!();

    // Overwrite semantics: re-running truncates, never appends
    println!("3. Re-running over the 16-byte file with 2 bytes of 0x00...");
    FillRequest::with_byte(&pattern, 2, 0x00).write()?;
    println!("   ✓ {} -> {:02X?}", pattern.display(), fs::read(&pattern)?);
    println!();

    fs::remove_dir_all(&dir)?;
    println!("Done (example files cleaned up).");

    Ok(())
}
