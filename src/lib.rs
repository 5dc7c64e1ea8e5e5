//! Fill-file test fixture generator
//!
//! Generates binary test files of an exact size, filled with one repeated
//! byte value. Useful for fixture workflows that need files with known,
//! trivially verifiable content (the default value 0xE4 packs the four pixel
//! channels W/G/B/R at 2 bits each).
//!
//! ## Features
//!
//! - **Exact output**: the produced file is exactly `length` bytes, every
//!   byte equal to the fill value
//! - **Base auto-detection**: sizes and values accept decimal, `0x` hex, and
//!   leading-`0` octal literals
//! - **Low-8-bit masking**: out-of-range fill values reduce modulo 256,
//!   so `300` fills with `0x2C` and `-1` with `0xFF`
//! - **Whole-file overwrite**: pre-existing files are truncated, never
//!   appended to
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fillfile::{generate, FillRequest, DEFAULT_FILL_BYTE};
//!
//! // Four 0xAB bytes
//! generate("out.bin", 4, 0xAB).unwrap();
//!
//! // Default pattern (0xE4)
//! generate("pattern.bin", 1024, DEFAULT_FILL_BYTE).unwrap();
//!
//! // From command-line-shaped literals
//! let request = FillRequest::from_literals("fixture.bin", "0x1000", Some("0377")).unwrap();
//! assert_eq!(request.length, 4096);
//! assert_eq!(request.byte, 0xFF);
//! request.write().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types for generation and literal parsing
//! - [`literal`] - Integer-literal parsing with base auto-detection
//! - [`fill`] - The fill request and write loop

pub mod error;
pub mod fill;
pub mod literal;

// Re-export commonly used types
pub use error::{FillError, Result};
pub use fill::{generate, FillRequest, DEFAULT_FILL_BYTE};
pub use literal::{parse_fill_byte, parse_length};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
