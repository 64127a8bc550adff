use core::fmt;

use crate::glyph::Glyph;

/// Errors
///
/// All of them are programmer or configuration errors: they are reported
/// immediately and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Two images (or rasters) that must share `(width, height)` do not.
    SizeMismatch,
    /// Two strings that must have the same number of characters do not.
    LengthMismatch,
    /// The character is outside of the morphing alphabet.
    UnknownGlyph(char),
    /// A parameter is out of its accepted range.
    InvalidConfiguration(&'static str),
    /// A segment in the given row is out of bounds, empty, or out of order.
    InvalidSegment { row: u16 },
    /// The font source could not provide the raster for a glyph.
    FontLoad { glyph: Glyph },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch => write!(f, "image dimensions differ"),
            Self::LengthMismatch => write!(f, "string lengths differ"),
            Self::UnknownGlyph(c) => write!(f, "no glyph for character {c:?}"),
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Self::InvalidSegment { row } => write!(f, "invalid segment in row {row}"),
            Self::FontLoad { glyph } => {
                write!(f, "failed to load glyph {:?}", glyph.source_name())
            }
        }
    }
}

impl core::error::Error for Error {}
