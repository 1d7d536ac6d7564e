//! X resources in the layout used by terminal.sexy exports.

use std::io::Write;

use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::theme::{AnsiColor, Theme};

/// Width of the `*.label:` column.
const LABEL_WIDTH: usize = 16;

fn resource(out: &mut dyn Write, name: &str, color: Color) -> Result<()> {
    let label = format!("*.{}:", name);
    writeln!(out, "{:<width$}{}", label, color, width = LABEL_WIDTH)?;
    Ok(())
}

/// Writes a `! special` block followed by one block per ANSI color.
pub fn encode(theme: &Theme, out: &mut dyn Write) -> Result<()> {
    debug!(format = "xres", "encoding theme");

    writeln!(out, "! special")?;
    resource(out, "foreground", theme.foreground())?;
    resource(out, "background", theme.background())?;
    resource(out, "cursorColor", theme.cursor())?;

    for color in AnsiColor::ALL {
        writeln!(out)?;
        writeln!(out, "! {}", color)?;
        resource(out, &format!("color{}", color.index()), theme.normal(color))?;
        resource(out, &format!("color{}", color.index() + 8), theme.bright(color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tests::sample_theme;
    use insta::assert_snapshot;

    #[test]
    fn test_encode_layout() {
        let mut buf = Vec::new();
        encode(&sample_theme(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_snapshot!(text, @r"
        ! special
        *.foreground:   #000102
        *.background:   #0c0d0e
        *.cursorColor:  #d8d9da

        ! black
        *.color0:       #18191a
        *.color8:       #242526

        ! red
        *.color1:       #303132
        *.color9:       #3c3d3e

        ! green
        *.color2:       #48494a
        *.color10:      #545556

        ! yellow
        *.color3:       #606162
        *.color11:      #6c6d6e

        ! blue
        *.color4:       #78797a
        *.color12:      #848586

        ! magenta
        *.color5:       #909192
        *.color13:      #9c9d9e

        ! cyan
        *.color6:       #a8a9aa
        *.color14:      #b4b5b6

        ! white
        *.color7:       #c0c1c2
        *.color15:      #cccdce
        ");
    }

    #[test]
    fn test_long_labels_are_not_truncated() {
        let mut buf = Vec::new();
        resource(&mut buf, "veryLongResourceName", Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(buf, b"*.veryLongResourceName:#010203\n");
    }
}
