//! Time source abstraction for interaction timing.

use std::cell::Cell;
use std::rc::Rc;

// Use web-time on WASM, std::time otherwise
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// A monotonic time source.
///
/// The panel never reads wall-clock time directly; hosts inject a clock so
/// double-activate and key-release timing can be driven deterministically.
pub trait Clock: std::fmt::Debug {
    /// Seconds elapsed since the clock's epoch.
    fn elapsed(&self) -> f64;
}

/// Clock backed by a monotonic [`Instant`] taken at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Create a clock whose epoch is "now".
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Manually advanced clock for tests and scripted event playback.
///
/// Clones share the same underlying time, so a handle kept outside the
/// panel can advance time while the panel holds the boxed clock.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock starting at zero seconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `dt` seconds.
    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }

    /// Set the clock to an absolute time in seconds.
    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_shared_handle() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        assert_eq!(clock.elapsed(), 0.0);

        handle.advance(0.5);
        assert!((clock.elapsed() - 0.5).abs() < f64::EPSILON);

        handle.set(2.0);
        assert!((clock.elapsed() - 2.0).abs() < f64::EPSILON);
    }
}
