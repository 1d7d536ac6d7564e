//! # termtint-codec - 4-bit Terminal Color Theme Conversion
//!
//! `termtint-codec` reads terminal color themes from several textual formats
//! into one format-agnostic [`Theme`], and renders a [`Theme`] back out into
//! several others, including escape sequences that reprogram a live
//! terminal's palette.
//!
//! ## Core Concepts
//!
//! - [`Color`]: a 24-bit RGB value parsed from `#rrggbb` / `0xrrggbb`
//! - [`Theme`]: 20 color slots (foreground, background, 8 normal + 8 bright
//!   ANSI colors, cursor, cursor_reverse)
//! - [`ThemeBuilder`]: slot-by-slot construction with an explicit
//!   missing-field check
//! - [`InputFormat`] / [`OutputFormat`]: the format registry
//! - [`decode`] / [`encode`]: one module per format
//!
//! ## Quick Start
//!
//! ```rust
//! use termtint_codec::{convert, InputFormat, OutputFormat};
//!
//! let gogh = "\
//! color_01: '#282a36'
//! color_02: '#ff5555'
//! color_03: '#50fa7b'
//! color_04: '#f1fa8c'
//! color_05: '#bd93f9'
//! color_06: '#ff79c6'
//! color_07: '#8be9fd'
//! color_08: '#bbbbbb'
//! color_09: '#44475a'
//! color_10: '#ff5555'
//! color_11: '#50fa7b'
//! color_12: '#f1fa8c'
//! color_13: '#bd93f9'
//! color_14: '#ff79c6'
//! color_15: '#8be9fd'
//! color_16: '#ffffff'
//! foreground: '#f8f8f2'
//! background: '#282a36'
//! cursor: '#f8f8f2'
//! ";
//!
//! let mut out = Vec::new();
//! convert(&mut gogh.as_bytes(), &mut out, InputFormat::Yaml, OutputFormat::Csv).unwrap();
//!
//! let csv = String::from_utf8(out).unwrap();
//! assert!(csv.starts_with("foreground,#f8f8f2\nbackground,#282a36\nblack,#282a36\n"));
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`ConvertError`]. Conversions are all-or-nothing: a
//! decoder either returns a complete theme or an error, and
//! [`OutputFormat::encode`] renders fully in memory before writing.

pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod theme;

use std::io::{Read, Write};

use tracing::debug;

pub use color::Color;
pub use error::{ConvertError, Direction, Result};
pub use format::{Decoder, Encoder, InputFormat, OutputFormat};
pub use theme::{AnsiColor, Slot, Theme, ThemeBuilder, SLOT_COUNT};

/// Decodes one theme from `input` and writes it to `output`.
///
/// Returns the intermediate theme. Nothing is written to `output` unless
/// decoding succeeded.
pub fn convert(
    input: &mut dyn Read,
    output: &mut dyn Write,
    from: InputFormat,
    to: OutputFormat,
) -> Result<Theme> {
    debug!(%from, %to, "converting theme");
    let theme = from.decode(input)?;
    to.encode(&theme, output)?;
    Ok(theme)
}
