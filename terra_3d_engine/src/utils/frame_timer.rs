//! Frame timing utilities for the outer loop.
//!
//! `FrameTimer` measures wall-clock seconds between frames for the
//! driver to feed into `Scene::update`; `FpsCounter` produces a
//! once-per-second FPS snapshot for display. Pure utilities; nothing
//! in the scene core depends on them.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time since the last restart.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    started: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds since construction or the last [`start`](FrameTimer::start).
    pub fn elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Restart the measurement window.
    pub fn start(&mut self) {
        self.started = Instant::now();
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts frames and reports FPS at most once per second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_started: Instant,
    frames_in_window: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            window_started: Instant::now(),
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Count one frame. Returns true when a fresh FPS value is
    /// available via [`fps`](FpsCounter::fps).
    pub fn update(&mut self) -> bool {
        self.frames_in_window += 1;
        let elapsed = self.window_started.elapsed();
        if elapsed < Duration::from_secs(1) {
            return false;
        }
        self.fps = (self.frames_in_window as f32 / elapsed.as_secs_f32()).round() as u32;
        self.frames_in_window = 0;
        self.window_started = Instant::now();
        true
    }

    /// Most recent FPS value (zero until the first full window).
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frame_timer_tests.rs"]
mod tests;
