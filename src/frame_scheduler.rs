//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::FrameSink;
use crate::clock::ClockDriver;
use crate::error::Result;

/// Default target frame rate (30 FPS).
///
/// With the default 20 steps over the animated 70% of a second this shows
/// every blend level.
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives a morphing clock.
///
/// This scheduler:
/// - Maps the monotonic `Instant` onto wall-clock seconds
/// - Tracks frame timing with drift correction
/// - Resolves the clock frames and hands them to the sink
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(clock, sink);
/// scheduler.sync_wall_clock(unix_time_secs(), Instant::from_millis(now_ms()));
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()))?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<S: FrameSink> {
    sink: S,
    clock: ClockDriver,
    next_frame: Instant,
    frame_duration: Duration,
    /// Wall-clock seconds at `Instant` zero
    epoch_offset: f64,
}

impl<S: FrameSink> FrameScheduler<S> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (30 FPS) for frame timing.
    pub fn new(clock: ClockDriver, sink: S) -> Self {
        Self::with_frame_duration(clock, sink, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(clock: ClockDriver, sink: S, frame_duration: Duration) -> Self {
        Self {
            sink,
            clock,
            next_frame: Instant::from_millis(0),
            frame_duration,
            epoch_offset: 0.0,
        }
    }

    /// Anchor the monotonic clock to wall-clock time.
    ///
    /// `epoch_secs` is the Unix time observed at `now`.
    pub fn sync_wall_clock(&mut self, epoch_secs: f64, now: Instant) {
        self.epoch_offset = epoch_secs - instant_secs(now);
    }

    /// Wall-clock seconds corresponding to `now`.
    pub fn wall_clock(&self, now: Instant) -> f64 {
        self.epoch_offset + instant_secs(now)
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Resolves the clock frames for the current wall-clock time
    /// 3. Writes them to the sink
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult> {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let secs = self.wall_clock(now);
        let frames = self.clock.frames_at(secs)?;
        self.sink.write(frames);

        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the clock driver.
    pub fn clock(&self) -> &ClockDriver {
        &self.clock
    }

    /// Get a mutable reference to the clock driver.
    pub fn clock_mut(&mut self) -> &mut ClockDriver {
        &mut self.clock
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[allow(clippy::cast_precision_loss)]
fn instant_secs(instant: Instant) -> f64 {
    instant.as_micros() as f64 / 1_000_000.0
}
