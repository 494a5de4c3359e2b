//! Resource module
//!
//! Immutable shared mesh data and per-drawable material parameters.

pub mod geometry;
pub mod material;

pub use geometry::{Geometry, GeometryDesc, Vertex};
pub use material::{MaterialParams, MaterialUniform};
