//! The format-agnostic theme model.
//!
//! A [`Theme`] is a full 4-bit terminal palette: foreground, background, the
//! eight ANSI colors in normal and bright variants, and the two cursor
//! colors. Every slot is always populated.
//!
//! # Canonical Order
//!
//! The eight ANSI names have a fixed order ([`AnsiColor::ALL`]):
//!
//! | Index | Normal | Bright (index + 8) |
//! |-------|--------|--------------------|
//! | 0 | `black` | `black_bright` |
//! | 1 | `red` | `red_bright` |
//! | 2 | `green` | `green_bright` |
//! | 3 | `yellow` | `yellow_bright` |
//! | 4 | `blue` | `blue_bright` |
//! | 5 | `magenta` | `magenta_bright` |
//! | 6 | `cyan` | `cyan_bright` |
//! | 7 | `white` | `white_bright` |
//!
//! Index-based formats (OSC palette sequences, `config.h` arrays,
//! `colorN` X resources) use exactly these positions.
//!
//! # Construction
//!
//! Decoders fill a [`ThemeBuilder`] slot by slot and finish with
//! [`ThemeBuilder::build`], which applies the cursor defaults and reports the
//! first unset slot as [`ConvertError::MissingField`]:
//!
//! ```rust
//! use termtint_codec::{Color, Slot, ThemeBuilder};
//!
//! let mut builder = ThemeBuilder::new();
//! for slot in Slot::ALL {
//!     builder.set(slot, Color::parse("#000000").unwrap());
//! }
//! let theme = builder.build().unwrap();
//! assert_eq!(theme.get(Slot::Cursor).hex(), "#000000");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{ConvertError, Result};

/// Number of color slots in a theme.
pub const SLOT_COUNT: usize = 20;

/// One of the eight base ANSI color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    /// The eight names in canonical palette order.
    pub const ALL: [AnsiColor; 8] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
    ];

    /// Palette index of the normal variant (0-7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of the normal variant, e.g. `red`.
    pub fn name(self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
        }
    }

    /// Name of the bright variant, e.g. `red_bright`.
    pub fn bright_name(self) -> &'static str {
        match self {
            AnsiColor::Black => "black_bright",
            AnsiColor::Red => "red_bright",
            AnsiColor::Green => "green_bright",
            AnsiColor::Yellow => "yellow_bright",
            AnsiColor::Blue => "blue_bright",
            AnsiColor::Magenta => "magenta_bright",
            AnsiColor::Cyan => "cyan_bright",
            AnsiColor::White => "white_bright",
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named color slot of a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Foreground,
    Background,
    Normal(AnsiColor),
    Bright(AnsiColor),
    Cursor,
    CursorReverse,
}

impl Slot {
    /// All slots in the fixed field order of the plain-text formats:
    /// foreground, background, each ANSI name followed by its bright
    /// variant, then the two cursor colors.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::Foreground,
        Slot::Background,
        Slot::Normal(AnsiColor::Black),
        Slot::Bright(AnsiColor::Black),
        Slot::Normal(AnsiColor::Red),
        Slot::Bright(AnsiColor::Red),
        Slot::Normal(AnsiColor::Green),
        Slot::Bright(AnsiColor::Green),
        Slot::Normal(AnsiColor::Yellow),
        Slot::Bright(AnsiColor::Yellow),
        Slot::Normal(AnsiColor::Blue),
        Slot::Bright(AnsiColor::Blue),
        Slot::Normal(AnsiColor::Magenta),
        Slot::Bright(AnsiColor::Magenta),
        Slot::Normal(AnsiColor::Cyan),
        Slot::Bright(AnsiColor::Cyan),
        Slot::Normal(AnsiColor::White),
        Slot::Bright(AnsiColor::White),
        Slot::Cursor,
        Slot::CursorReverse,
    ];

    /// Field name used by the plain-text formats.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Foreground => "foreground",
            Slot::Background => "background",
            Slot::Normal(c) => c.name(),
            Slot::Bright(c) => c.bright_name(),
            Slot::Cursor => "cursor",
            Slot::CursorReverse => "cursor_reverse",
        }
    }

    /// Looks up a slot by field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Maps a 16-color palette index to its slot: 0-7 normal, 8-15 bright.
    pub fn from_palette_index(index: usize) -> Option<Self> {
        match index {
            0..=7 => Some(Slot::Normal(AnsiColor::ALL[index])),
            8..=15 => Some(Slot::Bright(AnsiColor::ALL[index - 8])),
            _ => None,
        }
    }

    /// The 16-color palette index of an ANSI slot.
    pub fn palette_index(self) -> Option<usize> {
        match self {
            Slot::Normal(c) => Some(c.index()),
            Slot::Bright(c) => Some(c.index() + 8),
            _ => None,
        }
    }

    /// Position of this slot in the theme's backing array.
    fn position(self) -> usize {
        match self {
            Slot::Foreground => 0,
            Slot::Background => 1,
            Slot::Normal(c) => 2 + c.index(),
            Slot::Bright(c) => 10 + c.index(),
            Slot::Cursor => 18,
            Slot::CursorReverse => 19,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ConvertError::unknown_key(s))
    }
}

/// A complete terminal color theme.
///
/// Themes are immutable. Build one with [`ThemeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    slots: [Color; SLOT_COUNT],
}

impl Theme {
    /// Cursor color used when a source format carries none.
    pub const DEFAULT_CURSOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);

    /// Reverse cursor color used when a source format carries none.
    pub const DEFAULT_CURSOR_REVERSE: Color = Color::rgb(0x55, 0x55, 0x55);

    /// Returns the color of a slot.
    pub fn get(&self, slot: Slot) -> Color {
        self.slots[slot.position()]
    }

    pub fn foreground(&self) -> Color {
        self.get(Slot::Foreground)
    }

    pub fn background(&self) -> Color {
        self.get(Slot::Background)
    }

    pub fn cursor(&self) -> Color {
        self.get(Slot::Cursor)
    }

    pub fn cursor_reverse(&self) -> Color {
        self.get(Slot::CursorReverse)
    }

    /// Normal variant of an ANSI color.
    pub fn normal(&self, color: AnsiColor) -> Color {
        self.get(Slot::Normal(color))
    }

    /// Bright variant of an ANSI color.
    pub fn bright(&self, color: AnsiColor) -> Color {
        self.get(Slot::Bright(color))
    }

    /// Color at a 16-color palette index (0-15).
    pub fn palette(&self, index: usize) -> Option<Color> {
        Slot::from_palette_index(index).map(|slot| self.get(slot))
    }

    /// Iterates `(slot, color)` pairs in [`Slot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Color)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Collects theme slots as a decoder reads its input.
///
/// Setting a slot twice keeps the last value, matching how every line-based
/// format treats repeated keys.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    slots: [Option<Color>; SLOT_COUNT],
}

impl ThemeBuilder {
    /// Creates a builder with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a slot.
    pub fn set(&mut self, slot: Slot, color: Color) -> &mut Self {
        self.slots[slot.position()] = Some(color);
        self
    }

    /// Returns the slot's value if it has been set.
    pub fn get(&self, slot: Slot) -> Option<Color> {
        self.slots[slot.position()]
    }

    /// Finishes the theme.
    ///
    /// `cursor` and `cursor_reverse` fall back to [`Theme::DEFAULT_CURSOR`]
    /// and [`Theme::DEFAULT_CURSOR_REVERSE`]. Any other unset slot fails with
    /// [`ConvertError::MissingField`], naming the first one in [`Slot::ALL`]
    /// order.
    pub fn build(self) -> Result<Theme> {
        let mut slots = [Theme::DEFAULT_CURSOR; SLOT_COUNT];
        for slot in Slot::ALL {
            slots[slot.position()] = match (self.get(slot), slot) {
                (Some(color), _) => color,
                (None, Slot::Cursor) => Theme::DEFAULT_CURSOR,
                (None, Slot::CursorReverse) => Theme::DEFAULT_CURSOR_REVERSE,
                (None, _) => return Err(ConvertError::MissingField { field: slot.name() }),
            };
        }
        Ok(Theme { slots })
    }
}
