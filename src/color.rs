//! Hex color parsing for cell values
//!
//! Cells hold either the empty string (transparent) or a hex color string.
//! Supported forms: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.

use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into `[r, g, b, a]` components.
///
/// - `#RGB` - 3-digit hex, each digit is doubled (e.g., `#F00` -> red)
/// - `#RGBA` - 4-digit hex, each digit is doubled
/// - `#RRGGBB` - 6-digit hex, alpha defaults to 255 (opaque)
/// - `#RRGGBBAA` - 8-digit hex, explicit alpha channel
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_hex(s: &str) -> Result<[u8; 4], ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if !s.starts_with('#') {
        return Err(ColorError::MissingHash);
    }

    let hex = &s[1..];
    let len = hex.len();

    // Validate all characters are hex
    for c in hex.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidHex(c));
        }
    }

    match len {
        3 => {
            // #RGB -> #RRGGBB (doubled digits), alpha = 255
            let mut chars = hex.chars();
            let r = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            let g = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            let b = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            Ok([r, g, b, 255])
        }
        4 => {
            // #RGBA -> #RRGGBBAA (doubled digits)
            let mut chars = hex.chars();
            let r = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            let g = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            let b = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            let a = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(len))?)? * 17;
            Ok([r, g, b, a])
        }
        6 => {
            // #RRGGBB, alpha = 255
            let r = parse_hex_pair(&hex[0..2])?;
            let g = parse_hex_pair(&hex[2..4])?;
            let b = parse_hex_pair(&hex[4..6])?;
            Ok([r, g, b, 255])
        }
        8 => {
            // #RRGGBBAA
            let r = parse_hex_pair(&hex[0..2])?;
            let g = parse_hex_pair(&hex[2..4])?;
            let b = parse_hex_pair(&hex[4..6])?;
            let a = parse_hex_pair(&hex[6..8])?;
            Ok([r, g, b, a])
        }
        _ => Err(ColorError::InvalidLength(len)),
    }
}

/// Whether a cell value is well-formed: empty (transparent) or a hex color.
pub fn is_valid_cell(value: &str) -> bool {
    value.is_empty() || parse_hex(value).is_ok()
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(s.len()))?)?;
    let low = parse_hex_digit(chars.next().ok_or(ColorError::InvalidLength(s.len()))?)?;
    Ok(high * 16 + low)
}
