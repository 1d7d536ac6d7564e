//! YAML theme documents.
//!
//! Two schema conventions are recognized by looking at the document shape:
//!
//! - **Gogh**: flat `color_01`..`color_16` keys (normal colors 1-8, bright
//!   colors 9-16) plus top-level `foreground`, `background` and `cursor`.
//!   Selected whenever a `color_01` key is present.
//! - **Alacritty**: nested `colors.primary`, `colors.normal` and
//!   `colors.bright` tables, with an optional `colors.cursor` table.
//!   Selected when `colors.primary` is a table and there is no `color_01`.
//!
//! Anything else fails with [`ConvertError::UnrecognizedSchema`].
//!
//! Color values are strings (`'#282a36'`, `'0x282a36'`). An unquoted
//! `0x282a36` is loaded by YAML as an integer and is accepted as well.

use serde_yaml::Value;
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{ConvertError, Result};
use crate::theme::{AnsiColor, Slot, Theme, ThemeBuilder};

/// Schema convention of a YAML theme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Gogh,
    Alacritty,
}

impl Schema {
    /// Inspects a parsed document and picks its convention.
    pub fn detect(doc: &Value) -> Option<Self> {
        if doc.get("color_01").is_some() {
            return Some(Schema::Gogh);
        }
        let primary = doc.get("colors").and_then(|colors| colors.get("primary"));
        if matches!(primary, Some(Value::Mapping(_))) {
            return Some(Schema::Alacritty);
        }
        None
    }
}

/// Reads a theme from a YAML document of either schema.
pub fn decode(text: &str) -> Result<Theme> {
    let doc: Value = serde_yaml::from_str(text)?;
    let schema = Schema::detect(&doc).ok_or(ConvertError::UnrecognizedSchema)?;
    debug!(?schema, "detected YAML theme schema");

    let theme = match schema {
        Schema::Gogh => decode_gogh(&doc)?,
        Schema::Alacritty => decode_alacritty(&doc)?,
    };
    debug!(format = "yaml", "decoded theme");
    Ok(theme)
}

/// Converts a YAML scalar into a color.
fn color_value(value: &Value, key: &str) -> Result<Color> {
    match value {
        Value::String(s) => Color::parse(s),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| ConvertError::parse(n.to_string()))
            .and_then(Color::from_packed),
        _ => Err(ConvertError::format(format!(
            "`{}` must be a color string, got {}",
            key,
            kind_of(value)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a table",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Sets `slot` from `table[key]` when the key exists.
///
/// Absent keys leave the slot unset, so [`ThemeBuilder::build`] reports them.
fn set_from(builder: &mut ThemeBuilder, table: Option<&Value>, key: &str, slot: Slot) -> Result<()> {
    if let Some(value) = table.and_then(|t| t.get(key)) {
        builder.set(slot, color_value(value, key)?);
    }
    Ok(())
}

fn decode_gogh(doc: &Value) -> Result<Theme> {
    let mut builder = ThemeBuilder::new();

    for color in AnsiColor::ALL {
        let normal_key = format!("color_{:02}", color.index() + 1);
        let bright_key = format!("color_{:02}", color.index() + 9);
        set_from(&mut builder, Some(doc), &normal_key, Slot::Normal(color))?;
        set_from(&mut builder, Some(doc), &bright_key, Slot::Bright(color))?;
    }
    for slot in [Slot::Foreground, Slot::Background, Slot::Cursor] {
        set_from(&mut builder, Some(doc), slot.name(), slot)?;
    }

    builder.build()
}

fn decode_alacritty(doc: &Value) -> Result<Theme> {
    let mut builder = ThemeBuilder::new();
    let colors = doc.get("colors");
    let table = |name: &str| colors.and_then(|c| c.get(name));

    let primary = table("primary");
    set_from(&mut builder, primary, "foreground", Slot::Foreground)?;
    set_from(&mut builder, primary, "background", Slot::Background)?;

    let normal = table("normal");
    let bright = table("bright");
    for color in AnsiColor::ALL {
        set_from(&mut builder, normal, color.name(), Slot::Normal(color))?;
        set_from(&mut builder, bright, color.name(), Slot::Bright(color))?;
    }

    // Alacritty also allows keywords like `CellForeground` here; only
    // literal colors carry over.
    let cursor = table("cursor");
    for (key, slot) in [("cursor", Slot::Cursor), ("text", Slot::CursorReverse)] {
        if let Some(value) = cursor.and_then(|c| c.get(key)) {
            match color_value(value, key) {
                Ok(color) => {
                    builder.set(slot, color);
                }
                Err(_) => trace!(key, "cursor entry is not a color, using default"),
            }
        }
    }

    builder.build()
}
