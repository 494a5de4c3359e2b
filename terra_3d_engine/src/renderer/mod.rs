//! Renderer seam.
//!
//! The engine never touches a graphics API. Each frame the scene binds
//! shared state ([`FrameState`]) on a [`RenderQueue`] and the drawables
//! submit [`DrawCall`]s in insertion order; a backend implementing the
//! trait decides how the work is executed (and is free to ignore it,
//! as the test mock does).

pub mod mock_renderer;

use std::sync::Arc;
use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::light::Light;
use crate::resource::{Geometry, MaterialUniform};

/// Per-frame shared bindings, captured by the scene before any
/// drawable submits work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub view: Mat4,
    pub projection: Mat4,
    /// World-space eye position.
    pub eye: Vec3,
    /// Light snapshot; `None` means unlit rendering.
    pub light: Option<Light>,
    /// Accumulated scene time in seconds.
    pub time: f32,
    /// Exposure/tone parameter.
    pub gamma: f32,
}

impl FrameState {
    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// One unit of rendering work: shared geometry plus per-drawable state.
#[derive(Clone)]
pub struct DrawCall {
    pub geometry: Arc<Geometry>,
    pub model: Mat4,
    pub material: MaterialUniform,
}

/// Backend seam for issuing rendering work.
///
/// Called once per frame in the order: `begin_frame`, N × `submit`
/// (the scene's insertion order), `end_frame`. Implementations may
/// fail any call; submit failures are swallowed at the drawable level,
/// begin/end failures propagate out of `Scene::draw`.
pub trait RenderQueue: Send + Sync {
    /// Bind per-frame shared state. Called before any submission.
    fn begin_frame(&mut self, frame: &FrameState) -> Result<()>;

    /// Submit one draw call.
    fn submit(&mut self, call: DrawCall) -> Result<()>;

    /// Finish the frame.
    fn end_frame(&mut self) -> Result<()>;
}
