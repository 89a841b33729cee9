//! Error types for tincture.
//!
//! The color math itself is total: degenerate inputs (no chroma, zero
//! saturation) resolve to sentinel values. Errors only come from parsing text
//! and from the palette boundary.

use std::num::ParseIntError;

use thiserror::Error;

use crate::Component;

/// Errors produced while parsing a textual color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// A hex color did not have 6 or 8 digits.
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    /// A hex color contained a character that is not a hex digit.
    #[error("invalid hex digit: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// The text is neither a hex color nor an `rgb()`/`rgba()` function.
    #[error("unrecognized color syntax: {0:?}")]
    InvalidSyntax(String),

    /// An argument of an `rgb()`/`rgba()` function is not a number.
    #[error("invalid number in color function: {0:?}")]
    InvalidNumber(String),

    /// A channel value is outside its allowed range.
    #[error("{channel} channel out of range: {value}")]
    OutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The value as written in the input.
        value: String,
    },
}

/// A grade label was not a number or one of the accent labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grade: {0:?}")]
pub struct ParseGradeError(pub String);

/// Errors produced when building a [`crate::TonalPalette`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TonalPaletteError {
    /// A palette needs at least one anchor color.
    #[error("a tonal palette needs at least one anchor")]
    NoAnchors,
}

/// Errors produced by the public operations of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text could not be parsed into a color.
    #[error(transparent)]
    ParseColor(#[from] ParseColorError),

    /// Palette matching was requested against an empty catalog.
    #[error("the palette catalog is empty")]
    EmptyCatalog,

    /// A palette could not be constructed.
    #[error(transparent)]
    Palette(#[from] TonalPaletteError),
}

/// Result type used throughout tincture.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn out_of_range(channel: &'static str, value: Component) -> ParseColorError {
    ParseColorError::OutOfRange {
        channel,
        value: value.to_string(),
    }
}
