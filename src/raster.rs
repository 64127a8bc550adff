//! Plain monochrome rasters
//!
//! A [`Raster`] is what the font source hands in and what display sinks get
//! back: a fixed-size, row-major grid of set/unset pixels.

use alloc::{string::String, vec, vec::Vec};

use crate::error::{Error, Result};

/// Row-major boolean pixel grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl Raster {
    /// Create a raster with every pixel unset
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; usize::from(width) * usize::from(height)],
        }
    }

    /// Create a raster by evaluating `pixel(x, y)` for every position
    pub fn from_fn(width: u16, height: u16, mut pixel: impl FnMut(u16, u16) -> bool) -> Self {
        let mut pixels = Vec::with_capacity(usize::from(width) * usize::from(height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Parse ASCII art, one string per row
    ///
    /// Every character other than a space is a set pixel. The width is taken
    /// from the first row; rows of a different length are rejected.
    pub fn from_ascii(rows: &[&str]) -> Result<Self> {
        let height = u16::try_from(rows.len()).map_err(|_| Error::SizeMismatch)?;
        let columns = rows.first().map_or(0, |row| row.chars().count());
        let width = u16::try_from(columns).map_err(|_| Error::SizeMismatch)?;

        let mut pixels = Vec::with_capacity(columns * rows.len());
        for row in rows {
            if row.chars().count() != columns {
                return Err(Error::SizeMismatch);
            }
            pixels.extend(row.chars().map(|cell| cell != ' '));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
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

    /// Pixel at `(x, y)`; positions outside the raster read as unset
    pub fn get(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[self.offset(x, y)]
    }

    /// Set or clear the pixel at `(x, y)`
    ///
    /// Writes outside the raster are ignored.
    pub fn set(&mut self, x: u16, y: u16, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        self.pixels[offset] = on;
    }

    /// Pixels of row `y`
    pub fn row(&self, y: u16) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let start = self.offset(0, y);
        Some(&self.pixels[start..start + usize::from(self.width)])
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.height).filter_map(|y| self.row(y))
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }

    /// Render as text: `marker` for set pixels, a space otherwise, rows
    /// separated by `\n`
    pub fn to_ascii(&self, marker: char) -> String {
        let mut out = String::with_capacity((usize::from(self.width) + 1) * usize::from(self.height));
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&on| if on { marker } else { ' ' }));
        }
        out
    }

    /// One byte per pixel (`1` set, `0` unset), row-major
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().map(|&on| u8::from(on)).collect()
    }

    #[allow(clippy::cast_lossless)]
    const fn offset(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
