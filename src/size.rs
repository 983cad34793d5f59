//! Parsing of human-readable byte sizes, such as `"100b"` or `"1.5 MiB"`.
//!
//! All units are powers of 1024, and units are case-insensitive:
//!
//! | unit                  | bytes  |
//! |-----------------------|--------|
//! | `b` (or no unit)      | 1      |
//! | `k`, `kb`, `ki`, `kib`| 1024¹  |
//! | `m`, `mb`, `mi`, `mib`| 1024²  |
//! | `g`, `gb`, `gi`, `gib`| 1024³  |
//! | `t`, `tb`, `ti`, `tib`| 1024⁴  |
//! | `p`, `pb`, `pi`, `pib`| 1024⁵  |
//!
//! Fractional values are allowed and are rounded down to a whole byte.

use crate::error::ByteSizeParseError;


const KIBIBYTE: u64 = 1024;


/// Parses a human-readable byte size into a number of bytes.
///
///
/// # Examples
/// ```
/// # use scratch_tree::size::parse_byte_size;
/// assert_eq!(parse_byte_size("100b").unwrap(), 100);
/// assert_eq!(parse_byte_size("4 KiB").unwrap(), 4096);
/// assert_eq!(parse_byte_size("1.5kb").unwrap(), 1536);
/// assert_eq!(parse_byte_size("2048").unwrap(), 2048);
/// ```
pub fn parse_byte_size(input: &str) -> Result<u64, ByteSizeParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ByteSizeParseError::Empty);
    }

    // Fast path for plain integers, which don't need to round-trip through `f64`.
    if let Ok(bytes) = input.parse::<u64>() {
        return Ok(bytes);
    }


    let unit_start = input
        .find(|character: char| !character.is_ascii_digit() && character != '.')
        .unwrap_or(input.len());

    let (number, unit) = input.split_at(unit_start);

    if number.is_empty() {
        return Err(ByteSizeParseError::InvalidNumber {
            input: input.to_string(),
        });
    }

    let multiplier = unit_multiplier(unit.trim_start())?;


    if let Ok(whole_number) = number.parse::<u64>() {
        return whole_number
            .checked_mul(multiplier)
            .ok_or_else(|| ByteSizeParseError::TooLarge {
                input: input.to_string(),
            });
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ByteSizeParseError::InvalidNumber {
            input: input.to_string(),
        })?;

    let bytes = (value * multiplier as f64).floor();

    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(ByteSizeParseError::TooLarge {
            input: input.to_string(),
        });
    }

    Ok(bytes as u64)
}


/// Maps a unit suffix to its multiplier.
fn unit_multiplier(unit: &str) -> Result<u64, ByteSizeParseError> {
    let exponent = match unit.to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "ki" | "kib" => 1,
        "m" | "mb" | "mi" | "mib" => 2,
        "g" | "gb" | "gi" | "gib" => 3,
        "t" | "tb" | "ti" | "tib" => 4,
        "p" | "pb" | "pi" | "pib" => 5,
        _ => {
            return Err(ByteSizeParseError::UnknownUnit {
                unit: unit.to_string(),
            })
        }
    };

    Ok(KIBIBYTE.pow(exponent))
}
