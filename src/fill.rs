//! Fill-file generation
//!
//! The single operation of this crate: open (create or truncate) a file and
//! write one byte value a requested number of times.

use crate::error::Result;
use crate::literal;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default fill value when none is supplied.
///
/// `0xE4` is `0b11_10_01_00`: the four pixel channels W, G, B, R packed at
/// 2 bits each, a recognizable pattern for channel-order checks in fixture
/// workflows. The generator itself attaches no meaning to it.
pub const DEFAULT_FILL_BYTE: u8 = 0xE4;

/// Staging buffer size for the write loop, so large files are not written
/// one syscall per byte.
const WRITE_CHUNK: usize = 64 * 1024;

/// A single generation job: destination path, byte count, fill value.
///
/// Constructed once (directly or from command-line literals), then consumed
/// by [`FillRequest::write`]. Fields are never mutated after construction.
///
/// # Examples
///
/// ```no_run
/// use fillfile::FillRequest;
///
/// // Four 0xAB bytes at out.bin
/// FillRequest::with_byte("out.bin", 4, 0xAB).write().unwrap();
///
/// // Default fill value (0xE4)
/// FillRequest::new("out.bin", 3).write().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRequest {
    /// Destination file path (parent directory must already exist)
    pub path: PathBuf,

    /// Number of bytes to write; 0 produces an empty file
    pub length: u64,

    /// The byte value repeated `length` times
    pub byte: u8,
}

impl FillRequest {
    /// Create a request with the default fill value.
    pub fn new(path: impl Into<PathBuf>, length: u64) -> Self {
        Self::with_byte(path, length, DEFAULT_FILL_BYTE)
    }

    /// Create a request with an explicit fill value.
    pub fn with_byte(path: impl Into<PathBuf>, length: u64, byte: u8) -> Self {
        FillRequest {
            path: path.into(),
            length,
            byte,
        }
    }

    /// Build a request from command-line-shaped inputs.
    ///
    /// `length` and `value` are integer literals with base auto-detection
    /// (see [`crate::literal`]); a missing `value` selects
    /// [`DEFAULT_FILL_BYTE`]. Out-of-range values are reduced to their low
    /// 8 bits at this boundary, so the request always holds a plain `u8`.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the offending literal if `length` is not
    /// a non-negative integer or `value` is not an integer.
    pub fn from_literals(
        path: impl Into<PathBuf>,
        length: &str,
        value: Option<&str>,
    ) -> Result<Self> {
        let length = literal::parse_length(length)?;
        let byte = match value {
            Some(v) => literal::parse_fill_byte(v)?,
            None => DEFAULT_FILL_BYTE,
        };
        Ok(FillRequest {
            path: path.into(),
            length,
            byte,
        })
    }

    /// Write the file: create or truncate `path`, then write `byte` exactly
    /// `length` times.
    ///
    /// Overwrites any pre-existing file in full; a pre-existing longer file
    /// ends up with exactly `length` bytes. The handle is flushed and closed
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Any create/open/write failure (missing parent directory, permissions,
    /// disk full) is propagated as an I/O error.
    pub fn write(&self) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let chunk = vec![self.byte; self.length.min(WRITE_CHUNK as u64) as usize];
        let mut remaining = self.length;
        while remaining > 0 {
            let n = remaining.min(chunk.len() as u64) as usize;
            file.write_all(&chunk[..n])?;
            remaining -= n as u64;
        }
        file.flush()?;

        tracing::debug!(
            "wrote {} x 0x{:02X} to {}",
            self.length,
            self.byte,
            self.path.display()
        );
        Ok(())
    }
}

/// Write `length` copies of `byte` to the file at `path`.
///
/// Convenience wrapper over [`FillRequest`]; pass [`DEFAULT_FILL_BYTE`] for
/// the default pattern.
pub fn generate<P: AsRef<Path>>(path: P, length: u64, byte: u8) -> Result<()> {
    FillRequest::with_byte(path.as_ref(), length, byte).write()
}
