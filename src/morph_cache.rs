//! Memoized per-character morphing
//!
//! Rendering a blend is the expensive part of the engine, and a clock only
//! ever asks for a small set of `(from, to, fraction)` triples. Every result
//! is kept for the lifetime of the cache.

use alloc::{collections::BTreeMap, sync::Arc, vec::Vec};

use crate::error::{Error, Result};
use crate::glyph::{Glyph, GlyphTable};
use crate::raster::Raster;

/// Cache key: source glyph, target glyph and the blend fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MorphKey {
    pub from: Glyph,
    pub to: Glyph,
    fraction_bits: u64,
}

impl MorphKey {
    /// `frac` must be within `[0, 1]`
    pub fn new(from: Glyph, to: Glyph, frac: f64) -> Self {
        // Adding +0.0 folds -0.0 into 0.0 so both share an entry
        let frac = frac + 0.0;
        Self {
            from,
            to,
            fraction_bits: frac.to_bits(),
        }
    }

    pub fn fraction(&self) -> f64 {
        f64::from_bits(self.fraction_bits)
    }
}

/// Glyph table plus the memoized blends between its glyphs
#[derive(Debug, Clone)]
pub struct MorphCache {
    table: GlyphTable,
    entries: BTreeMap<MorphKey, Arc<Raster>>,
    computations: usize,
}

impl MorphCache {
    pub const fn new(table: GlyphTable) -> Self {
        Self {
            table,
            entries: BTreeMap::new(),
            computations: 0,
        }
    }

    /// Raster of `from` morphed into `to` by `frac`
    pub fn morphed(&mut self, from: char, to: char, frac: f64) -> Result<Arc<Raster>> {
        if !(0.0..=1.0).contains(&frac) {
            return Err(Error::InvalidConfiguration(
                "morph fraction must be within [0, 1]",
            ));
        }
        let from = Glyph::from_char(from).ok_or(Error::UnknownGlyph(from))?;
        let to = Glyph::from_char(to).ok_or(Error::UnknownGlyph(to))?;
        let key = MorphKey::new(from, to, frac);

        if let Some(raster) = self.entries.get(&key) {
            return Ok(Arc::clone(raster));
        }

        let merged = self.table.get(from).merge(self.table.get(to), frac)?;
        let raster = Arc::new(merged.to_raster());
        self.computations += 1;
        self.entries.insert(key, Arc::clone(&raster));

        Ok(raster)
    }

    /// One morphed raster per character position of `from`/`to`
    pub fn bitmaps_for_strings(
        &mut self,
        from: &str,
        to: &str,
        frac: f64,
    ) -> Result<Vec<Arc<Raster>>> {
        if from.chars().count() != to.chars().count() {
            return Err(Error::LengthMismatch);
        }

        from.chars()
            .zip(to.chars())
            .map(|(a, b)| self.morphed(a, b, frac))
            .collect()
    }

    pub const fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// Number of blends actually computed (cache misses)
    pub const fn computations(&self) -> usize {
        self.computations
    }

    /// Number of cached rasters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &MorphKey) -> bool {
        self.entries.contains_key(key)
    }
}
