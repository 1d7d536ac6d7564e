//! X resource database (`~/.Xresources`) color entries.
//!
//! ```text
//! ! special
//! *.foreground:   #c5c8c6
//! *.background:   #1d1f21
//! *.cursorColor:  #c5c8c6
//! URxvt*color1:   #a54242
//! ```
//!
//! Only the part of the resource name after the last `*` or `.` is looked at.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ConvertError, Result};
use crate::theme::{Slot, Theme, ThemeBuilder};

static RESOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^:]+):\s*(#[0-9a-fA-F]{6})").expect("valid X resource regex")
});

/// Strips the resource class/instance path, keeping the final component.
fn base_label(label: &str) -> &str {
    let label = label.trim();
    label.rsplit(['*', '.']).next().unwrap_or(label)
}

/// Maps a resource label to a slot.
///
/// Returns `Ok(None)` for labels that are not colors this model knows about
/// (e.g. `highlightColor`); those entries are ignored.
fn slot_for_label(label: &str) -> Result<Option<Slot>> {
    match label {
        "foreground" => Ok(Some(Slot::Foreground)),
        "background" => Ok(Some(Slot::Background)),
        "cursorColor" => Ok(Some(Slot::Cursor)),
        _ => match label.strip_prefix("color") {
            Some(number) => number
                .parse::<usize>()
                .ok()
                .and_then(Slot::from_palette_index)
                .map(Some)
                .ok_or_else(|| ConvertError::unknown_key(label)),
            None => Ok(None),
        },
    }
}

/// Reads a theme from X resource lines.
///
/// Blank lines and `!` comments are skipped. Any other line must look like
/// `label: #rrggbb` or the whole read fails.
pub fn decode(text: &str) -> Result<Theme> {
    let mut builder = ThemeBuilder::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('!') {
            continue;
        }

        let caps = RESOURCE.captures(trimmed).ok_or_else(|| {
            ConvertError::format_at(line_no, format!("expected `label: #rrggbb`, got {:?}", line))
        })?;

        let label = base_label(&caps[1]);
        match slot_for_label(label)? {
            Some(slot) => {
                builder.set(slot, Color::parse(&caps[2])?);
            }
            None => trace!(line = line_no, label, "ignoring resource"),
        }
    }

    let theme = builder.build()?;
    debug!(format = "xres", "decoded theme");
    Ok(theme)
}
