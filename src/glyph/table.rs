//! Pre-segmented glyphs for the whole alphabet

use alloc::{collections::BTreeMap, vec::Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{GLYPH_COUNT, Glyph};
use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::segment::SegmentedImage;

/// Provider of glyph bitmaps
///
/// Implement this trait to read glyphs from font files, flash, or generated
/// data. Closures `FnMut(Glyph) -> Result<Raster, E>` implement it too.
pub trait GlyphSource {
    type Error;

    /// Load the bitmap for `glyph`
    fn load(&mut self, glyph: Glyph) -> core::result::Result<Raster, Self::Error>;
}

impl<F, E> GlyphSource for F
where
    F: FnMut(Glyph) -> core::result::Result<Raster, E>,
{
    type Error = E;

    fn load(&mut self, glyph: Glyph) -> core::result::Result<Raster, E> {
        self(glyph)
    }
}

/// Segmented image for every [`Glyph`]
///
/// All glyphs that are morphed into each other must share the same size;
/// the table does not check this, [`SegmentedImage::merge`] reports it.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: Vec<SegmentedImage>,
    max_width: u16,
    max_height: u16,
}

impl GlyphTable {
    /// Load every glyph from `source`
    ///
    /// Stops at the first glyph the source fails to provide; a table with
    /// holes is never returned.
    pub fn load<S: GlyphSource>(source: &mut S) -> Result<Self> {
        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        let mut max_width = 0;
        let mut max_height = 0;

        for glyph in Glyph::ALL.into_iter().filter(|glyph| glyph.is_loaded()) {
            #[cfg(feature = "esp32-log")]
            println!("[GlyphTable.load] processing {}", glyph.source_name());

            let raster = source.load(glyph).map_err(|_| Error::FontLoad { glyph })?;

            #[cfg(feature = "esp32-log")]
            println!(
                "[GlyphTable.load] dimension {}x{}",
                raster.width(),
                raster.height()
            );

            max_width = max_width.max(raster.width());
            max_height = max_height.max(raster.height());
            glyphs.push(SegmentedImage::from_raster(&raster));
        }

        glyphs.push(SegmentedImage::blank(max_width, max_height));

        Ok(Self {
            glyphs,
            max_width,
            max_height,
        })
    }

    /// Build the table from already decoded rasters
    ///
    /// Every glyph except [`Glyph::Space`] must be present. A raster given for
    /// the space is ignored.
    pub fn from_rasters(rasters: impl IntoIterator<Item = (Glyph, Raster)>) -> Result<Self> {
        let mut rasters: BTreeMap<Glyph, Raster> = rasters.into_iter().collect();
        Self::load(&mut |glyph: Glyph| rasters.remove(&glyph).ok_or(()))
    }

    /// Segmented image of `glyph`
    pub fn get(&self, glyph: Glyph) -> &SegmentedImage {
        &self.glyphs[glyph.index()]
    }

    /// Segmented image of the glyph for `c`
    pub fn lookup(&self, c: char) -> Result<&SegmentedImage> {
        let glyph = Glyph::from_char(c).ok_or(Error::UnknownGlyph(c))?;
        Ok(self.get(glyph))
    }

    /// Bounding box of the largest glyph, `(width, height)`
    pub const fn dimensions(&self) -> (u16, u16) {
        (self.max_width, self.max_height)
    }
}
