//! xterm OSC escape sequences that reprogram a running terminal's palette.
//!
//! Writing this output to a terminal that understands OSC 4/10/11/12 (xterm,
//! st, tmux, VTE-based terminals) applies the theme immediately.

use std::io::Write;

use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::theme::{AnsiColor, Theme};

const ESC: char = '\x1b';
const BEL: char = '\x07';

fn osc(out: &mut dyn Write, body: std::fmt::Arguments<'_>) -> Result<()> {
    write!(out, "{}]{}{}", ESC, body, BEL)?;
    Ok(())
}

fn dynamic(out: &mut dyn Write, code: u8, color: Color) -> Result<()> {
    osc(out, format_args!("{};{}", code, color))
}

/// Writes 16 palette sequences, each normal color followed by its bright
/// variant (indices 0, 8, 1, 9, ... 7, 15), then the foreground, background
/// and cursor sequences. No separators, no trailing newline.
pub fn encode(theme: &Theme, out: &mut dyn Write) -> Result<()> {
    debug!(format = "osc", "encoding theme");
    for color in AnsiColor::ALL {
        let index = color.index();
        osc(out, format_args!("4;{};{}", index, theme.normal(color)))?;
        osc(out, format_args!("4;{};{}", index + 8, theme.bright(color)))?;
    }
    dynamic(out, 10, theme.foreground())?;
    dynamic(out, 11, theme.background())?;
    dynamic(out, 12, theme.cursor())?;
    Ok(())
}
