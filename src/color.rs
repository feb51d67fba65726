//! Hex color text → packed 32-bit RGBA.

use crate::error::{ThemeError, ThemeErrorKind, ThemeResult};

/// Parses `"RRGGBB"` or `"RRGGBBAA"` (no prefix) into a packed integer with
/// red in the most significant byte. Six digits imply an opaque alpha of
/// `0xFF`.
pub fn parse_hex_color(text: &str) -> ThemeResult<u32> {
    if text.is_empty() {
        return Err(ThemeError::new(ThemeErrorKind::EmptyColor));
    }

    let len = text.len();
    if len != 6 && len != 8 {
        return Err(ThemeError::new(ThemeErrorKind::InvalidColor {
            value: text.to_string(),
            length: len,
        }));
    }

    // from_str_radix tolerates a leading sign, so digits are checked first
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::new(ThemeErrorKind::InvalidColor {
            value: text.to_string(),
            length: len,
        }));
    }

    let value = u32::from_str_radix(text, 16).map_err(|_| {
        ThemeError::new(ThemeErrorKind::InvalidColor {
            value: text.to_string(),
            length: len,
        })
    })?;

    Ok(if len == 6 { (value << 8) | 0xFF } else { value })
}
