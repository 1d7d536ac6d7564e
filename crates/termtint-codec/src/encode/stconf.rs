//! suckless st `config.h` color array.
//!
//! Produces the body of the `colorname[]` initializer, ready to paste:
//!
//! ```text
//! /* 8 normal colors */
//! [0] = "#282828",  /* black */
//! ...
//!
//! /* 8 bright colors */
//! [8] = "#928374",  /* black_bright */
//! ...
//!
//! /* special colors */
//! [256] = "#282828",  /* background */
//! [257] = "#ebdbb2",  /* foreground */
//! ```

use std::io::Write;

use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::theme::{AnsiColor, Slot, Theme};

fn entry(out: &mut dyn Write, index: usize, color: Color, name: &str) -> Result<()> {
    writeln!(out, "[{}] = \"{}\",  /* {} */", index, color, name)?;
    Ok(())
}

pub fn encode(theme: &Theme, out: &mut dyn Write) -> Result<()> {
    debug!(format = "stconf", "encoding theme");

    writeln!(out, "/* 8 normal colors */")?;
    for color in AnsiColor::ALL {
        entry(out, color.index(), theme.normal(color), color.name())?;
    }
    writeln!(out)?;

    writeln!(out, "/* 8 bright colors */")?;
    for color in AnsiColor::ALL {
        let slot = Slot::Bright(color);
        entry(out, color.index() + 8, theme.get(slot), slot.name())?;
    }
    writeln!(out)?;

    writeln!(out, "/* special colors */")?;
    entry(out, 256, theme.background(), "background")?;
    entry(out, 257, theme.foreground(), "foreground")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tests::sample_theme;

    fn render() -> String {
        let mut buf = Vec::new();
        encode(&sample_theme(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_encode_groups() {
        let text = render();
        let groups: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].lines().count(), 9);
        assert_eq!(groups[1].lines().count(), 9);
        assert_eq!(groups[2].lines().count(), 3);
    }

    #[test]
    fn test_encode_entry_shape() {
        let text = render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "/* 8 normal colors */");
        assert_eq!(lines[1], "[0] = \"#18191a\",  /* black */");
        assert_eq!(lines[11], "[8] = \"#242526\",  /* black_bright */");
        assert_eq!(lines[21], "[256] = \"#0c0d0e\",  /* background */");
        assert_eq!(lines[22], "[257] = \"#000102\",  /* foreground */");
    }

    #[test]
    fn test_encode_indices_in_canonical_order() {
        let text = render();
        let comments: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with('['))
            .map(|l| l.rsplit("/* ").next().unwrap().trim_end_matches(" */"))
            .collect();
        assert_eq!(&comments[..3], ["black", "red", "green"]);
        assert_eq!(&comments[8..10], ["black_bright", "red_bright"]);
    }
}
