//! Format registry.
//!
//! The only place where format identifiers exist as strings. Each identifier
//! maps to one [`InputFormat`] or [`OutputFormat`], and each of those maps to
//! exactly one decoder or encoder function.
//!
//! | Identifier | Input | Output | Format |
//! |------------|:-----:|:------:|--------|
//! | `yaml`, `yml` | ✓ | | Gogh / Alacritty YAML |
//! | `nidx` | ✓ | ✓ | `name #rrggbb` lines |
//! | `stconf` | ✓ | ✓ | st `config.h` color array |
//! | `xres` | ✓ | ✓ | X resources |
//! | `csv` | ✓ | ✓ | `name,#rrggbb` records |
//! | `osc` | | ✓ | terminal escape sequences |
//!
//! Write support is deliberately narrower than read support.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use termtint_codec::{InputFormat, OutputFormat};
//!
//! let from: InputFormat = "yml".parse().unwrap();
//! assert_eq!(from, InputFormat::Yaml);
//!
//! let to = OutputFormat::from_path(Path::new("theme.xres")).unwrap();
//! assert_eq!(to, OutputFormat::Xres);
//!
//! assert!("osc".parse::<InputFormat>().is_err());
//! ```

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::decode;
use crate::encode;
use crate::error::{ConvertError, Direction, Result};
use crate::theme::Theme;

/// Reads a theme from the full input text.
pub type Decoder = fn(&str) -> Result<Theme>;

/// Renders a theme to an output stream.
pub type Encoder = fn(&Theme, &mut dyn Write) -> Result<()>;

/// A format themes can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Yaml,
    Nidx,
    StConf,
    Xres,
    Csv,
}

/// Identifier table, in display order. The first entry for a format is its
/// canonical identifier.
const INPUT_IDENTIFIERS: &[(&str, InputFormat)] = &[
    ("yaml", InputFormat::Yaml),
    ("yml", InputFormat::Yaml),
    ("nidx", InputFormat::Nidx),
    ("stconf", InputFormat::StConf),
    ("xres", InputFormat::Xres),
    ("csv", InputFormat::Csv),
];

impl InputFormat {
    /// Every accepted identifier, aliases included.
    pub fn identifiers() -> impl Iterator<Item = &'static str> {
        INPUT_IDENTIFIERS.iter().map(|(id, _)| *id)
    }

    /// Looks up an identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        INPUT_IDENTIFIERS
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|(_, format)| *format)
    }

    /// Infers the format from a file extension (`theme.yml` → `Yaml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_identifier)
    }

    /// Canonical identifier.
    pub fn identifier(self) -> &'static str {
        INPUT_IDENTIFIERS
            .iter()
            .find(|(_, format)| *format == self)
            .map(|(id, _)| *id)
            .unwrap_or("unknown")
    }

    /// The decoder registered for this format.
    pub fn decoder(self) -> Decoder {
        match self {
            InputFormat::Yaml => decode::yaml::decode,
            InputFormat::Nidx => decode::nidx::decode,
            InputFormat::StConf => decode::stconf::decode,
            InputFormat::Xres => decode::xres::decode,
            InputFormat::Csv => decode::csv::decode,
        }
    }

    /// Reads the whole stream and decodes it.
    pub fn decode(self, input: &mut dyn Read) -> Result<Theme> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        self.decode_str(&text)
    }

    /// Decodes already-loaded input text.
    pub fn decode_str(self, text: &str) -> Result<Theme> {
        (self.decoder())(text)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for InputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s).ok_or_else(|| ConvertError::UnsupportedFormat {
            direction: Direction::Input,
            identifier: s.to_string(),
        })
    }
}

/// A format themes can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    StConf,
    Nidx,
    Xres,
    Csv,
    Osc,
}

const OUTPUT_IDENTIFIERS: &[(&str, OutputFormat)] = &[
    ("stconf", OutputFormat::StConf),
    ("nidx", OutputFormat::Nidx),
    ("xres", OutputFormat::Xres),
    ("csv", OutputFormat::Csv),
    ("osc", OutputFormat::Osc),
];

impl OutputFormat {
    /// Every accepted identifier.
    pub fn identifiers() -> impl Iterator<Item = &'static str> {
        OUTPUT_IDENTIFIERS.iter().map(|(id, _)| *id)
    }

    /// Looks up an identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        OUTPUT_IDENTIFIERS
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|(_, format)| *format)
    }

    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_identifier)
    }

    /// Canonical identifier.
    pub fn identifier(self) -> &'static str {
        OUTPUT_IDENTIFIERS
            .iter()
            .find(|(_, format)| *format == self)
            .map(|(id, _)| *id)
            .unwrap_or("unknown")
    }

    /// The encoder registered for this format.
    pub fn encoder(self) -> Encoder {
        match self {
            OutputFormat::StConf => encode::stconf::encode,
            OutputFormat::Nidx => encode::nidx::encode,
            OutputFormat::Xres => encode::xres::encode,
            OutputFormat::Csv => encode::csv::encode,
            OutputFormat::Osc => encode::osc::encode,
        }
    }

    /// Renders the theme to a string.
    pub fn render(self, theme: &Theme) -> Result<String> {
        let mut buf = Vec::new();
        (self.encoder())(theme, &mut buf)?;
        // Every encoder writes ASCII only.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Renders the theme and writes it to `output` in one piece.
    ///
    /// The output is fully rendered in memory first, so an encoder failure
    /// never leaves half a theme in the stream.
    pub fn encode(self, theme: &Theme, output: &mut dyn Write) -> Result<()> {
        let mut buf = Vec::new();
        (self.encoder())(theme, &mut buf)?;
        output.write_all(&buf)?;
        Ok(())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s).ok_or_else(|| ConvertError::UnsupportedFormat {
            direction: Direction::Output,
            identifier: s.to_string(),
        })
    }
}
