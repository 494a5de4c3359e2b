//! Scene management module
//!
//! The flat scene graph: polymorphic drawables in insertion order, one
//! camera, an optional light, and the per-frame update/draw entry
//! points.

mod bodies;
mod drawable;
mod scene;

pub use bodies::{LightMarker, Planet, Satellite};
pub use drawable::Drawable;
pub use scene::{DrawableRef, Scene};
