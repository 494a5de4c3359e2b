//! Small engine utilities.

pub mod frame_timer;

pub use frame_timer::{FpsCounter, FrameTimer};
