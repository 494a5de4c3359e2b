//! Engine-side input event types.
//!
//! The frame driver owns the window toolkit; before forwarding
//! keyboard events to the camera it maps toolkit key codes onto these
//! types, keeping the engine toolkit-agnostic.

/// Keys the camera reacts to. Everything else maps to `Other` and is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Home,
    Other,
}

/// State change of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}
