//! Whitespace-separated name/value pairs, one per line.
//!
//! ```text
//! # lines starting with '#' are comments
//! foreground #d8dee9
//! background #2e3440
//! black #3b4252
//! ```

use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ConvertError, Result};
use crate::theme::{Slot, Theme, ThemeBuilder};

/// Reads a theme from `name value` lines.
///
/// Every non-comment line must split into exactly two whitespace-separated
/// tokens. Names are the [`Slot`] field names; unknown names fail with
/// [`ConvertError::UnknownKey`].
pub fn decode(text: &str) -> Result<Theme> {
    let mut builder = ThemeBuilder::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.starts_with('#') {
            trace!(line = line_no, "skipping comment");
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, value] = fields.as_slice() else {
            return Err(ConvertError::format_at(
                line_no,
                format!("expected `name value`, got {} fields", fields.len()),
            ));
        };

        let slot: Slot = name.parse()?;
        builder.set(slot, Color::parse(value)?);
    }

    let theme = builder.build()?;
    debug!(format = "nidx", "decoded theme");
    Ok(theme)
}
