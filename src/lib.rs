#![no_std]

extern crate alloc;

use alloc::sync::Arc;

pub mod clock;
pub mod error;
pub mod frame_scheduler;
pub mod glyph;
mod merge;
pub mod morph_cache;
pub mod raster;
pub mod segment;

pub use clock::{ClockConfig, ClockDriver, SharedClock, TimeFormat};
pub use error::{Error, Result};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use glyph::{Glyph, GlyphSource, GlyphTable};
pub use morph_cache::{MorphCache, MorphKey};
pub use raster::Raster;
pub use segment::{Segment, SegmentedImage};

pub use embassy_time::{Duration, Instant};

/// Abstract display sink trait
///
/// Implement this trait to push frames to different displays.
/// The frame scheduler is generic over this trait.
pub trait FrameSink {
    /// Write one raster per character position, left to right
    fn write(&mut self, frames: &[Arc<Raster>]);
}
