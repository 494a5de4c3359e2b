/// Drawable: polymorphic renderable entity.
///
/// A drawable couples a spatial transform, per-instance material
/// parameters, and optionally a geometry shared with other drawables.
/// Concrete types decide how the model matrix is derived and how time
/// advances their state; the scene only ever sees this trait.

use std::sync::Arc;
use glam::Mat4;
use crate::engine_warn;
use crate::renderer::{DrawCall, FrameState, RenderQueue};
use crate::resource::{Geometry, MaterialParams};
use crate::transform::Transform;

pub trait Drawable: Send + Sync {
    /// The drawable's stored spatial state.
    fn transform(&self) -> &Transform;

    /// Shading parameters, owned exclusively by this drawable.
    fn material_params(&self) -> &MaterialParams;

    /// Shared mesh data. `None` is legal: such a drawable submits no
    /// mesh work (e.g. a light marker).
    fn geometry(&self) -> Option<&Arc<Geometry>>;

    /// Name used in log messages.
    fn name(&self) -> &str {
        "drawable"
    }

    /// Advance time-dependent state. `delta_time` is the clamped
    /// per-frame step, `current_time` the scene's accumulated clock,
    /// both in seconds. Default: static drawable, nothing to advance.
    fn update(&mut self, delta_time: f32, current_time: f32) {
        let _ = (delta_time, current_time);
    }

    /// Local-to-world matrix. Defaults to the stored transform;
    /// override for derived placement (e.g. orbital motion computed
    /// from elapsed time rather than stored position).
    fn model_matrix(&self) -> Mat4 {
        self.transform().model_matrix()
    }

    /// Submit this drawable's rendering work for the current frame.
    ///
    /// Read-only with respect to the drawable's own state; animation
    /// belongs in [`update`](Drawable::update). The default combines
    /// `model_matrix()`, the material params and the geometry into one
    /// draw call; without geometry it submits nothing. A failed
    /// submission is logged and swallowed here, so one misbehaving
    /// drawable never stops the frame.
    fn draw(&self, frame: &FrameState, queue: &mut dyn RenderQueue) {
        let _ = frame;
        let Some(geometry) = self.geometry() else {
            return;
        };
        let call = DrawCall {
            geometry: Arc::clone(geometry),
            model: self.model_matrix(),
            material: self.material_params().to_uniform(),
        };
        if let Err(err) = queue.submit(call) {
            engine_warn!("terra3d::Drawable", "'{}' draw failed: {}", self.name(), err);
        }
    }
}

#[cfg(test)]
#[path = "drawable_tests.rs"]
mod tests;
