//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseCsvError};

/// Top-level error type bubbled up by public APIs.
///
/// The layout engine itself has no recoverable error states — ragged
/// rows, empty tables and over-wide content are all defined inputs.
/// What can fail is the boundary: writing to the output sink, and the
/// CLI glue (CSV ingest, colour/style names).
#[derive(Debug)]
pub enum TableError {
    Io(io::Error),
    Csv(ParseCsvError),
    Color(ColorError),
    UnknownStyle(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "{e}"),
            TableError::Csv(e) => write!(f, "{e}"),
            TableError::Color(e) => write!(f, "{e}"),
            TableError::UnknownStyle(s) => {
                write!(f, "unknown line style '{s}' (see `styles` subcommand)")
            }
        }
    }
}
impl Error for TableError {}

// automatic conversions
impl From<io::Error> for TableError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for TableError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ColorError> for TableError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
