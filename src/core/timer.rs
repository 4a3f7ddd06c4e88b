/// Self-contained update timer - accumulates delta time and decides when to fire

/// Slack for float accumulation, so a stream of exact `1/hz` deltas fires every time
const TICK_EPSILON: f32 = 1e-6;

/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire.
    /// A slow frame fires once; the backlog is dropped rather than replayed.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator + TICK_EPSILON >= self.interval {
            self.accumulator = (self.accumulator - self.interval).clamp(0.0, self.interval);
            true
        } else {
            false
        }
    }

    /// Fraction of the interval accumulated towards the next tick
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.interval
    }
}
