use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields wall-clock frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Deterministic frames at a fixed rate, for headless replays.
///
/// The first frame has zero delta so it shows `start_time` exactly.
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    step: f32,
    start_time: f32,
    frame_number: u64,
    count: u64,
}

impl FixedStepFrames {
    pub fn new(fps: f32, start_time: f32, count: u64) -> Self {
        Self {
            step: 1.0 / fps,
            start_time,
            frame_number: 0,
            count,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.frame_number >= self.count {
            return None;
        }

        let number = self.frame_number;
        let delta = if number == 0 { 0.0 } else { self.step };
        // Multiply rather than accumulate so late frames do not drift
        let time = self.start_time + number as f32 * self.step;

        self.frame_number += 1;
        Some(FrameInfo::new(number, time, delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.frame_number) as usize;
        (remaining, Some(remaining))
    }
}
