//! Interpolation between two segmented images
//!
//! Segments are paired by their index within a row, not by overlap. When one
//! row runs out of segments its last one is reused; an empty row contributes
//! a zero-width segment at the horizontal center, so shapes grow out of and
//! collapse into the middle of the glyph.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::segment::{Segment, SegmentedImage};

/// Where the counterpart of the `n`th segment comes from
#[derive(Debug, Clone, Copy)]
enum Counterpart {
    /// The row has an `n`th segment
    Present(Segment),
    /// The row is shorter, its last segment stands in
    UseLast(Segment),
    /// The row is empty
    Midpoint,
}

impl Counterpart {
    fn pick(row: &[Segment], index: usize) -> Self {
        match (row.get(index), row.last()) {
            (Some(segment), _) => Self::Present(*segment),
            (None, Some(last)) => Self::UseLast(*last),
            (None, None) => Self::Midpoint,
        }
    }

    const fn resolve(self, width: u16) -> Segment {
        match self {
            Self::Present(segment) | Self::UseLast(segment) => segment,
            Self::Midpoint => Segment::new(width / 2, width / 2),
        }
    }
}

impl SegmentedImage {
    /// Blend `self` into `other`
    ///
    /// `frac` weights the two inputs: `0.0` keeps `self`, `1.0` yields
    /// `other`. Both images must have the same size.
    pub fn merge(&self, other: &Self, frac: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&frac) {
            return Err(Error::InvalidConfiguration(
                "merge fraction must be within [0, 1]",
            ));
        }
        if self.size() != other.size() {
            return Err(Error::SizeMismatch);
        }

        let width = self.width();
        let rows = self
            .rows()
            .iter()
            .zip(other.rows())
            .map(|(from, to)| merge_row(from, to, width, frac))
            .collect();

        Ok(Self::from_parts(width, self.height(), rows))
    }
}

fn merge_row(from: &[Segment], to: &[Segment], width: u16, frac: f64) -> Vec<Segment> {
    let count = from.len().max(to.len());
    (0..count)
        .map(|index| {
            let a = Counterpart::pick(from, index).resolve(width);
            let b = Counterpart::pick(to, index).resolve(width);
            Segment::new(lerp_column(a.start, b.start, frac), lerp_column(a.end, b.end, frac))
        })
        .collect()
}

/// Interpolate a column and truncate toward zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_column(from: u16, to: u16, frac: f64) -> u16 {
    let from = f64::from(from);
    let value = from + frac * (f64::from(to) - from);
    libm::trunc(value) as u16
}
