//! Error types for theme conversion.
//!
//! Every decoder and encoder reports failures through [`ConvertError`]. A
//! conversion is all-or-nothing: the first error aborts it and no partial
//! theme or partial output is ever produced by the library.

use std::fmt;

/// Which side of a conversion a format identifier was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

/// Errors that can occur while reading or writing a theme.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A color literal is malformed (no `#rrggbb` / `0xrrggbb` run found).
    #[error("unexpected color format: {value}")]
    Parse { value: String },

    /// A line or document does not have the shape the decoder expects.
    #[error("{}", format_message(*line, message))]
    Format {
        /// 1-based line number, when the failure is tied to a line.
        line: Option<usize>,
        message: String,
    },

    /// A structured document matches neither known schema convention.
    #[error("unrecognized YAML theme schema (expected `color_01` keys or a `colors.primary` table)")]
    UnrecognizedSchema,

    /// The input ended without supplying a required theme slot.
    #[error("missing color: {field}")]
    MissingField { field: &'static str },

    /// An entry names a slot, index or label outside the known color table.
    #[error("unknown color key: {key}")]
    UnknownKey { key: String },

    /// No decoder/encoder is registered for the requested identifier.
    #[error("unsupported {direction} format: {identifier}")]
    UnsupportedFormat {
        direction: Direction,
        identifier: String,
    },

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The structured document is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn format_message(line: Option<usize>, message: &str) -> String {
    match line {
        Some(n) => format!("unexpected format on line {}: {}", n, message),
        None => format!("unexpected format: {}", message),
    }
}

impl ConvertError {
    /// Create a parse error for a malformed color literal.
    pub fn parse(value: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
        }
    }

    /// Create a format error tied to a 1-based line number.
    pub fn format_at(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a format error for a whole document.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            line: None,
            message: message.into(),
        }
    }

    /// Create an unknown-key error.
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line() as usize);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ConvertError::Io(io),
            _ => ConvertError::Format { line, message },
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
