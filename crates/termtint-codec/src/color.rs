//! RGB color values.
//!
//! A [`Color`] is created only by parsing a hex literal and is rendered back
//! in the canonical lowercase `#rrggbb` form:
//!
//! ```rust
//! use termtint_codec::Color;
//!
//! let c = Color::parse("0xFF6B35").unwrap();
//! assert_eq!(c.to_string(), "#ff6b35");
//!
//! // Surrounding punctuation is fine; the first hex run wins.
//! let c = Color::parse(r##"  "#282A36",  /* black */"##).unwrap();
//! assert_eq!(c.to_string(), "#282a36");
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ConvertError, Result};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:#|0x)([0-9a-fA-F]{6})").expect("valid hex color regex"));

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Parses the first `#rrggbb` or `0xrrggbb` run found anywhere in `text`.
    ///
    /// Hex digits are case-insensitive. Anything before or after the run is
    /// ignored, so callers can pass whole lines with quotes and commas.
    pub fn parse(text: &str) -> Result<Self> {
        let digits = HEX_COLOR
            .captures(text)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ConvertError::parse(text.trim()))?
            .as_str();

        // The regex guarantees six ASCII hex digits.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ConvertError::parse(text.trim()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub(crate) const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` integer.
    ///
    /// YAML loaders turn an unquoted `0x282a36` into a number; this is how the
    /// structured-document decoders get it back. Values above `0xFFFFFF` are
    /// rejected.
    pub(crate) fn from_packed(value: u64) -> Result<Self> {
        if value > 0xFF_FFFF {
            return Err(ConvertError::parse(format!("{:#x}", value)));
        }
        Ok(Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Renders the canonical `#rrggbb` form.
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash_prefix() {
        let c = Color::parse("#ff6b35").unwrap();
        assert_eq!((c.r(), c.g(), c.b()), (255, 107, 53));
    }

    #[test]
    fn test_parse_0x_prefix() {
        let c = Color::parse("0x00ff00").unwrap();
        assert_eq!((c.r(), c.g(), c.b()), (0, 255, 0));
    }

    #[test]
    fn test_parse_uppercase_renders_lowercase() {
        assert_eq!(Color::parse("#ABCDEF").unwrap().hex(), "#abcdef");
        assert_eq!(Color::parse("0xABcdEF").unwrap().hex(), "#abcdef");
    }

    #[test]
    fn test_parse_zero_pads_channels() {
        assert_eq!(Color::parse("#010203").unwrap().hex(), "#010203");
    }

    #[test]
    fn test_parse_finds_run_inside_line() {
        let c = Color::parse(r##"[4] = "#268BD2",  /* blue */"##).unwrap();
        assert_eq!(c.hex(), "#268bd2");
    }

    #[test]
    fn test_parse_takes_first_run() {
        let c = Color::parse("#111111 #222222").unwrap();
        assert_eq!(c.hex(), "#111111");
    }

    #[test]
    fn test_parse_rejects_short_hex() {
        let err = Color::parse("#fff").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(Color::parse("ff6b35").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(Color::parse("#gggggg").is_err());
    }

    #[test]
    fn test_from_str() {
        let c: Color = "#000000".parse().unwrap();
        assert_eq!(c.hex(), "#000000");
    }

    #[test]
    fn test_from_packed() {
        assert_eq!(Color::from_packed(0x282a36).unwrap().hex(), "#282a36");
        assert!(Color::from_packed(0x1_000_000).is_err());
    }
}
