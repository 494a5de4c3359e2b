//! Camera module
//!
//! An orbit camera plus the engine-side input event types the frame
//! driver translates window-toolkit events into.

mod camera;
mod input;

pub use camera::Camera;
pub use input::{Key, KeyAction};
