//! Morphing clock driver
//!
//! Turns a wall-clock timestamp into one raster per character, morphing the
//! current second's string into the next one. The first `1 - resting` part
//! of every second animates; the rest holds the fully morphed target.

mod format;
mod shared;

use alloc::{sync::Arc, vec::Vec};

pub use format::{TIME_STRING_CAPACITY, TimeFormat, TimeString};
pub use shared::SharedClock;

use crate::error::{Error, Result};
use crate::glyph::GlyphTable;
use crate::morph_cache::MorphCache;
use crate::raster::Raster;

/// Default number of blend levels per second
pub const DEFAULT_STEPS: u32 = 20;

/// Default share of each second that holds the final glyphs
pub const DEFAULT_RESTING: f64 = 0.3;

/// Configuration for the clock driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockConfig {
    /// Quantization buckets per second, at least 1
    pub steps: u32,
    /// Trailing fraction of each second without animation, in `[0, 1)`
    pub resting: f64,
    /// Displayed pattern
    pub format: TimeFormat,
    /// Offset of local time from UTC
    pub utc_offset_secs: i32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            resting: DEFAULT_RESTING,
            format: TimeFormat::default(),
            utc_offset_secs: 0,
        }
    }
}

impl ClockConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(Error::InvalidConfiguration("steps must be positive"));
        }
        if !(0.0..1.0).contains(&self.resting) {
            return Err(Error::InvalidConfiguration("resting must be within [0, 1)"));
        }
        Ok(())
    }
}

/// Blend position within a second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantized {
    /// Bucket index, `0..=steps`
    pub level: u32,
    /// `level / steps`
    pub fraction: f64,
}

/// Last resolved second and its frames
#[derive(Debug, Clone)]
struct ClockState {
    next: TimeString,
    level: u32,
    frames: Vec<Arc<Raster>>,
}

/// Clock driver - maps timestamps to morph frames
pub struct ClockDriver {
    cache: MorphCache,
    config: ClockConfig,
    state: Option<ClockState>,
}

impl ClockDriver {
    /// Create a driver over a fresh morph cache
    pub fn new(table: GlyphTable, config: ClockConfig) -> Result<Self> {
        Self::with_cache(MorphCache::new(table), config)
    }

    /// Create a driver over an existing, possibly warm, morph cache
    pub fn with_cache(cache: MorphCache, config: ClockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cache,
            config,
            state: None,
        })
    }

    /// Frames for the timestamp `secs` (seconds since the Unix epoch)
    ///
    /// Repeated polls that land on the same second and the same blend level
    /// return the remembered frames without touching the cache.
    pub fn frames_at(&mut self, secs: f64) -> Result<&[Arc<Raster>]> {
        let current = self.config.format.format(secs, self.config.utc_offset_secs)?;
        let next = self
            .config
            .format
            .format(secs + 1.0, self.config.utc_offset_secs)?;
        if current.chars().count() != next.chars().count() {
            return Err(Error::LengthMismatch);
        }

        let quantized = self.quantize(secs)?;
        let stale = self
            .state
            .as_ref()
            .is_none_or(|state| state.next != next || state.level != quantized.level);

        if stale {
            let frames = self
                .cache
                .bitmaps_for_strings(&current, &next, quantized.fraction)?;
            self.state = Some(ClockState {
                next,
                level: quantized.level,
                frames,
            });
        }

        match &self.state {
            Some(state) => Ok(&state.frames),
            None => Ok(&[]),
        }
    }

    /// Blend position for `secs` without rendering anything
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn quantize(&self, secs: f64) -> Result<Quantized> {
        if !secs.is_finite() {
            return Err(Error::InvalidConfiguration("timestamp must be finite"));
        }

        let steps = f64::from(self.config.steps);
        let fraction_of_second = secs - libm::floor(secs);
        let animated = (fraction_of_second / (1.0 - self.config.resting)).min(1.0);
        let level = libm::floor(animated * steps) as u32;

        Ok(Quantized {
            level,
            fraction: f64::from(level) / steps,
        })
    }

    pub const fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub const fn cache(&self) -> &MorphCache {
        &self.cache
    }

    /// Forget the remembered frames; the morph cache is kept
    pub fn reset(&mut self) {
        self.state = None;
    }
}
