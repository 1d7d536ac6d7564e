//! Headerless CSV-lite: `name,#rrggbb` records.
//!
//! Same contract as [`nidx`](super::nidx), split on commas. Lines starting
//! with `#` are comments; whitespace around fields is ignored. Blank lines
//! are not records and fail like any other line without two fields.

use tracing::debug;

use crate::color::Color;
use crate::error::{ConvertError, Result};
use crate::theme::{Slot, Theme, ThemeBuilder};

/// Reads a theme from `name,value` records.
pub fn decode(text: &str) -> Result<Theme> {
    // The reader skips empty lines on its own.
    if let Some(line_no) = text
        .lines()
        .position(|line| !line.starts_with('#') && line.trim().is_empty())
    {
        return Err(ConvertError::format_at(
            line_no + 1,
            "expected `name,value`, got an empty line",
        ));
    }

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut builder = ThemeBuilder::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 2 {
            let line = record.position().map(|p| p.line() as usize);
            return Err(ConvertError::Format {
                line,
                message: format!("expected `name,value`, got {} fields", record.len()),
            });
        }

        let slot: Slot = record[0].parse()?;
        builder.set(slot, Color::parse(&record[1])?);
    }

    let theme = builder.build()?;
    debug!(format = "csv", "decoded theme");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::AnsiColor;

    fn full_input() -> String {
        Slot::ALL
            .iter()
            .map(|slot| format!("{},#102030\n", slot.name()))
            .collect()
    }

    #[test]
    fn test_decode_full_input() {
        let theme = decode(&full_input()).unwrap();
        assert_eq!(theme.bright(AnsiColor::Cyan).hex(), "#102030");
    }

    #[test]
    fn test_decode_trims_fields() {
        let input = full_input().replace(',', " , ");
        assert!(decode(&input).is_ok());
    }

    #[test]
    fn test_decode_crlf_line_endings() {
        let input = full_input().replace('\n', "\r\n");
        assert!(decode(&input).is_ok());
    }

    #[test]
    fn test_decode_skips_comments() {
        let input = format!("# name,hex\n{}", full_input());
        assert!(decode(&input).is_ok());
    }

    #[test]
    fn test_decode_wrong_field_count_reports_line() {
        let input = "foreground,#ffffff\nbackground,#000000,extra\n";
        match decode(input) {
            Err(ConvertError::Format { line, .. }) => assert_eq!(line, Some(2)),
            other => panic!("expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_blank_line_is_format_error() {
        let input = full_input().replacen('\n', "\n\n", 1);
        match decode(&input) {
            Err(ConvertError::Format { line, .. }) => assert_eq!(line, Some(2)),
            other => panic!("expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_whitespace_only_line_is_format_error() {
        let input = format!("{}  \t\n", full_input());
        match decode(&input) {
            Err(ConvertError::Format { line, .. }) => assert_eq!(line, Some(21)),
            other => panic!("expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_whitespace_separated_line_is_format_error() {
        let err = decode("foreground #ffffff\n").unwrap_err();
        assert!(matches!(err, ConvertError::Format { .. }));
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode("foreground,#ffffff\n").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingField {
                field: "background"
            }
        ));
    }

    #[test]
    fn test_decode_unknown_name() {
        let err = decode("bright_red,#ff0000\n").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownKey { .. }));
    }
}
