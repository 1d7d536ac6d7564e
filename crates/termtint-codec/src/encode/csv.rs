//! Headerless CSV-lite output.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::theme::Theme;

/// Writes one `name,#rrggbb` record per slot, in the same order as
/// [`nidx`](super::nidx).
pub fn encode(theme: &Theme, out: &mut dyn Write) -> Result<()> {
    debug!(format = "csv", "encoding theme");
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(out);

    for (slot, color) in theme.iter() {
        writer.write_record([slot.name(), color.hex().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
