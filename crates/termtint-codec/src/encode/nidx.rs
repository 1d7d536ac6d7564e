//! Whitespace-separated name/value pairs.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::theme::Theme;

/// Writes one `name #rrggbb` line per slot in [`Slot::ALL`](crate::Slot::ALL) order.
pub fn encode(theme: &Theme, out: &mut dyn Write) -> Result<()> {
    debug!(format = "nidx", "encoding theme");
    for (slot, color) in theme.iter() {
        writeln!(out, "{} {}", slot, color)?;
    }
    Ok(())
}
