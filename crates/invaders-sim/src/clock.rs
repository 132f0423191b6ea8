//! Frame clocks. The host owns the clock and hands each tick its delta.

use std::time::Instant;

/// Supplies the delta-time for the next tick.
pub trait ClockSource {
    /// Seconds since the previous call (or since creation for the first call).
    fn delta(&mut self) -> f32;
}

/// Deterministic clock: every tick is exactly `dt` seconds.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// Clock stepping at `rate` ticks per second.
    pub fn from_rate(rate: u32) -> Self {
        Self::new(1.0 / rate.max(1) as f32)
    }
}

impl ClockSource for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// Real time between calls.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for WallClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
