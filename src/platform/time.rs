//! Frame clock

use std::time::{Duration, Instant};

/// Paces frames and reports the elapsed time of the last one
pub trait Clock {
    /// Wait out the remainder of the frame budget for `target_fps` and return
    /// seconds elapsed since the previous tick
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Real time clock that sleeps to hold the target frame rate
#[derive(Debug)]
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

impl Clock for WallClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let spent = self.last.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Returns the same dt every frame (tests, fast headless runs)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// One frame at `fps`
    pub fn at_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }
}

impl Clock for FixedClock {
    fn tick(&mut self, _target_fps: u32) -> f32 {
        self.dt
    }
}
