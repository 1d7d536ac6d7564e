//! The color array of a suckless st `config.h`.
//!
//! Expects the color part of the config, not the whole file:
//!
//! ```text
//! static const char *colorname[] = {
//!     /* 8 normal colors */
//!     "#282828",
//!     "#cc241d",
//!     ...
//!     [255] = 0,
//!     [256] = "#282828",
//!     [257] = "#ebdbb2",
//! };
//! ```
//!
//! Only the first `"#rrggbb"` literal of a line is read, so the initializer
//! needs one entry per line. Each literal is assigned to a running index
//! that starts at 0 and advances after every literal. An explicit `[n] =`
//! designator moves the index to `n` first. Indices 0-15 are the ANSI
//! palette, 256 is the background and 257 the foreground. Scanning stops at
//! the end of the line where the index passes 257, so whatever follows the
//! special colors is never looked at.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ConvertError, Result};
use crate::theme::{Slot, Theme, ThemeBuilder};

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:\[(\d+)\]\s*=\s*)?"(#[0-9a-fA-F]{6})""#).expect("valid config.h entry regex")
});

const BACKGROUND_INDEX: usize = 256;
const FOREGROUND_INDEX: usize = 257;

/// Maps a `colorname[]` index to its theme slot.
fn slot_for_index(index: usize) -> Option<Slot> {
    match index {
        BACKGROUND_INDEX => Some(Slot::Background),
        FOREGROUND_INDEX => Some(Slot::Foreground),
        _ => Slot::from_palette_index(index),
    }
}

/// Reads a theme from an st `colorname[]` initializer.
pub fn decode(text: &str) -> Result<Theme> {
    let mut builder = ThemeBuilder::new();
    let mut index = 0usize;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim_start().starts_with("//") {
            trace!(line = line_no, "skipping comment");
            continue;
        }

        if let Some(caps) = ENTRY.captures(line) {
            if let Some(designator) = caps.get(1) {
                // Too large for usize is as unknown as any other bad index.
                index = designator
                    .as_str()
                    .parse()
                    .map_err(|_| ConvertError::unknown_key(format!("[{}]", designator.as_str())))?;
            }

            let slot = slot_for_index(index)
                .ok_or_else(|| ConvertError::unknown_key(format!("[{}]", index)))?;
            builder.set(slot, Color::parse(&caps[2])?);
            index += 1;
        }

        if index > FOREGROUND_INDEX {
            trace!(line = line_no, "past the special colors, stopping");
            break;
        }
    }

    let theme = builder.build()?;
    debug!(format = "stconf", "decoded theme");
    Ok(theme)
}
