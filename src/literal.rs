//! Integer-literal parsing with base auto-detection
//!
//! Byte counts and fill values are given as integer literals whose radix is
//! inferred from the prefix, the way `strtol`-family parsers with base 0 work:
//! `0x`/`0X` selects hexadecimal, a leading `0` followed by more digits
//! selects octal, anything else is decimal.

use crate::error::{FillError, Result};

/// Split a literal into its sign and magnitude parts.
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Split an unsigned literal into its radix and digit portion.
///
/// `"0"` on its own is decimal zero, not an octal prefix.
fn split_radix(s: &str) -> (u32, &str) {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    }
}

/// Parse the magnitude of a literal (no sign) under the auto-detect rule.
fn parse_magnitude(s: &str) -> std::result::Result<u64, String> {
    let (radix, digits) = split_radix(s);
    if digits.is_empty() {
        return Err(match radix {
            16 => "missing digits after hex prefix".to_string(),
            _ => "empty literal".to_string(),
        });
    }
    // from_str_radix tolerates a sign of its own; a sign inside the digit
    // portion (e.g. "0x-1") is not a valid literal here.
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err("misplaced sign".to_string());
    }
    u64::from_str_radix(digits, radix).map_err(|e| match radix {
        16 => format!("{} (hexadecimal)", e),
        8 => format!("{} (octal; literals with a leading 0 are octal)", e),
        _ => e.to_string(),
    })
}

/// Parse a byte count: a non-negative integer literal, base auto-detected.
///
/// A leading `+` is tolerated; a negative byte count is rejected.
///
/// # Examples
///
/// ```
/// use fillfile::literal::parse_length;
///
/// assert_eq!(parse_length("4096").unwrap(), 4096);
/// assert_eq!(parse_length("0x1000").unwrap(), 4096);
/// assert_eq!(parse_length("010").unwrap(), 8);
/// assert_eq!(parse_length("0").unwrap(), 0);
///
/// assert!(parse_length("-1").is_err()); // byte counts cannot be negative
/// assert!(parse_length("08").is_err()); // 8 is not an octal digit
/// ```
pub fn parse_length(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    let (negative, magnitude) = split_sign(trimmed);
    if negative {
        return Err(FillError::InvalidLength {
            literal: s.to_string(),
            reason: "byte count cannot be negative".to_string(),
        });
    }
    parse_magnitude(magnitude).map_err(|reason| FillError::InvalidLength {
        literal: s.to_string(),
        reason,
    })
}

/// Parse a fill value: an integer literal, base auto-detected, reduced to its
/// low 8 bits.
///
/// Values outside `[0, 255]` wrap modulo 256, so `300` and `-1` are accepted
/// and yield `0x2C` and `0xFF` respectively.
///
/// # Examples
///
/// ```
/// use fillfile::literal::parse_fill_byte;
///
/// assert_eq!(parse_fill_byte("0xAB").unwrap(), 0xAB);
/// assert_eq!(parse_fill_byte("228").unwrap(), 0xE4);
/// assert_eq!(parse_fill_byte("0377").unwrap(), 0xFF);
/// assert_eq!(parse_fill_byte("300").unwrap(), 44); // 300 mod 256
/// assert_eq!(parse_fill_byte("-1").unwrap(), 0xFF);
///
/// assert!(parse_fill_byte("0x").is_err());
/// assert!(parse_fill_byte("ab").is_err());
/// ```
pub fn parse_fill_byte(s: &str) -> Result<u8> {
    let trimmed = s.trim();
    let (negative, magnitude) = split_sign(trimmed);
    let value = parse_magnitude(magnitude).map_err(|reason| FillError::InvalidFillValue {
        literal: s.to_string(),
        reason,
    })?;
    let masked = (value & 0xFF) as u8;
    Ok(if negative { masked.wrapping_neg() } else { masked })
}
