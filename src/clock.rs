//! Frame clock
//!
//! Turns raw frame timestamps (milliseconds, e.g. from `requestAnimationFrame`)
//! into a smoothed frame rate and the `dt` the simulation is stepped with.

use crate::consts::{DEFAULT_DT, MAX_DT};

const WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_times: [f64; WINDOW],
    frame_index: usize,
    samples: usize,
    fps: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; WINDOW],
            frame_index: 0,
            samples: 0,
            fps: 0.0,
        }
    }

    /// Record a frame presented at `time_ms`
    pub fn tick(&mut self, time_ms: f64) {
        let oldest_idx = (self.frame_index + WINDOW - self.samples.min(WINDOW - 1)) % WINDOW;
        let oldest_time = self.frame_times[oldest_idx];
        let span = self.samples.min(WINDOW - 1);

        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % WINDOW;
        self.samples = (self.samples + 1).min(WINDOW);

        if span > 0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = (span as f64 * 1000.0 / elapsed) as f32;
            }
        }
    }

    /// Average frame rate over the recent window (0 until two frames)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Seconds per frame at the current rate
    pub fn delta(&self) -> f32 {
        if self.fps > 0.0 {
            (1.0 / self.fps).min(MAX_DT)
        } else {
            DEFAULT_DT
        }
    }
}
