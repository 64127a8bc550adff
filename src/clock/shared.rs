//! Clock driver shared between execution contexts
//!
//! Both the morph cache and the remembered frames are read-modify-write
//! state, so every access runs inside a critical section.

use alloc::sync::Arc;
use core::cell::RefCell;

use critical_section::Mutex;

use super::ClockDriver;
use crate::error::Result;
use crate::raster::Raster;

/// A [`ClockDriver`] behind a critical-section mutex
pub struct SharedClock {
    inner: Mutex<RefCell<ClockDriver>>,
}

impl SharedClock {
    pub const fn new(driver: ClockDriver) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Resolve the frames for `secs` and hand them to `f`
    ///
    /// `f` runs inside the critical section and must not access this clock
    /// again.
    pub fn with_frames<R>(&self, secs: f64, f: impl FnOnce(&[Arc<Raster>]) -> R) -> Result<R> {
        critical_section::with(|cs| {
            let mut driver = self.inner.borrow(cs).borrow_mut();
            let frames = driver.frames_at(secs)?;
            Ok(f(frames))
        })
    }

    /// Run `f` with exclusive access to the driver
    pub fn with<R>(&self, f: impl FnOnce(&mut ClockDriver) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }
}
