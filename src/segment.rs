//! Run-length segmented images
//!
//! Every raster row is stored as the ordered list of its "on" runs. This is
//! the representation glyphs are morphed in: moving the ends of runs around
//! gives a smooth melt between two shapes.

use alloc::{vec, vec::Vec};

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Half-open `[start, end)` run of set pixel columns in one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: u16,
    pub end: u16,
}

impl Segment {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Number of covered columns
    pub const fn len(self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Zero-width segments are produced by merging into an empty row
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

/// Run-length encoded monochrome image
///
/// Immutable once built. `rows.len() == height`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentedImage {
    width: u16,
    height: u16,
    rows: Vec<Vec<Segment>>,
}

impl SegmentedImage {
    /// Segment every row of a raster
    pub fn from_raster(raster: &Raster) -> Self {
        let width = raster.width();
        Self {
            width,
            height: raster.height(),
            rows: raster.rows().map(|row| segments_from_row(row, width)).collect(),
        }
    }

    /// Image of the given size with no set pixels
    pub fn blank(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![Vec::new(); usize::from(height)],
        }
    }

    /// Build an image from explicit segments
    ///
    /// Each row must hold non-empty segments within `[0, width)`, ordered left
    /// to right and neither overlapping nor touching (touching runs would
    /// have been a single run).
    pub fn from_rows(width: u16, rows: Vec<Vec<Segment>>) -> Result<Self> {
        let height = u16::try_from(rows.len()).map_err(|_| Error::SizeMismatch)?;

        for (y, row) in (0..height).zip(&rows) {
            let mut previous_end: Option<u16> = None;
            for segment in row {
                let ordered = previous_end.is_none_or(|end| segment.start > end);
                if segment.is_empty() || segment.end > width || !ordered {
                    return Err(Error::InvalidSegment { row: y });
                }
                previous_end = Some(segment.end);
            }
        }

        Ok(Self {
            width,
            height,
            rows,
        })
    }

    pub(crate) const fn from_parts(width: u16, height: u16, rows: Vec<Vec<Segment>>) -> Self {
        Self {
            width,
            height,
            rows,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// `(width, height)`
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Segments of every row, top to bottom
    pub fn rows(&self) -> &[Vec<Segment>] {
        &self.rows
    }

    /// Segments of row `y`, empty if `y` is out of range
    pub fn row(&self, y: u16) -> &[Segment] {
        self.rows
            .get(usize::from(y))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Materialize back into a pixel grid
    pub fn to_raster(&self) -> Raster {
        let mut raster = Raster::new(self.width, self.height);
        for (y, row) in (0..self.height).zip(&self.rows) {
            for segment in row {
                for x in segment.start..segment.end.min(self.width) {
                    raster.set(x, y, true);
                }
            }
        }
        raster
    }
}

/// Scan one raster row into its runs of set pixels
fn segments_from_row(row: &[bool], width: u16) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = None;

    for (x, &on) in (0..width).zip(row) {
        match (start, on) {
            (None, true) => start = Some(x),
            (Some(begin), false) => {
                segments.push(Segment::new(begin, x));
                start = None;
            }
            _ => {}
        }
    }

    // A run touching the right edge is still open
    if let Some(begin) = start {
        segments.push(Segment::new(begin, width));
    }

    segments
}
