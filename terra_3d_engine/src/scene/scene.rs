/// Scene: ordered owner of the drawables, the camera and the light.
///
/// Drawables are stored and drawn in exactly the order they were
/// added; there is no sorting, filtering or culling. Ordering is the
/// assembler's responsibility: an enclosing background body (the
/// planet) must go in last, because later opaque geometry occludes
/// earlier geometry and blending composites in submission order.
///
/// Update and draw are decoupled: update is pure state advancement
/// and never issues rendering work, draw is read-only with respect to
/// every drawable's state.

use std::sync::{Arc, Mutex};
use crate::camera::Camera;
use crate::engine_warn;
use crate::error::Result;
use crate::light::Light;
use crate::renderer::{FrameState, RenderQueue};
use super::drawable::Drawable;

/// Shared handle to a drawable. The scene and the assembly code may
/// both hold one; the scene's copy drives iteration.
pub type DrawableRef = Arc<Mutex<dyn Drawable>>;

const DEFAULT_GAMMA: f32 = 1.2;

pub struct Scene {
    drawables: Vec<DrawableRef>,
    camera: Arc<Mutex<Camera>>,
    light: Option<Arc<Mutex<Light>>>,
    current_time: f32,
    gamma: f32,
}

impl Scene {
    /// Empty scene with a default camera, no light, and the clock at
    /// zero.
    pub fn new() -> Self {
        Self {
            drawables: Vec::new(),
            camera: Arc::new(Mutex::new(Camera::new())),
            light: None,
            current_time: 0.0,
            gamma: DEFAULT_GAMMA,
        }
    }

    /// Append a drawable.
    ///
    /// The relative order of prior additions is preserved; draw order
    /// is exactly insertion order, so occluding background bodies go
    /// in last. Adding the same handle twice is legal and draws it
    /// twice. There is no removal.
    pub fn add_drawable(&mut self, drawable: DrawableRef) {
        self.drawables.push(drawable);
    }

    /// The scene's camera. Created with the scene, present for its
    /// whole lifetime.
    pub fn camera(&self) -> Arc<Mutex<Camera>> {
        Arc::clone(&self.camera)
    }

    /// Install the shared light. Absence means unlit rendering.
    pub fn set_light(&mut self, light: Arc<Mutex<Light>>) {
        self.light = Some(light);
    }

    pub fn light(&self) -> Option<Arc<Mutex<Light>>> {
        self.light.as_ref().map(Arc::clone)
    }

    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }

    /// Accumulated scene time in seconds. Monotonic: see
    /// [`update`](Scene::update).
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn set_gamma(&mut self, gamma: f32) {
        self.gamma = gamma;
    }

    /// Advance the scene clock and propagate time to the light and the
    /// drawables.
    ///
    /// Pure state advancement: no rendering work is issued, so this
    /// runs without any backend. A negative delta (misbehaving timer)
    /// is clamped to zero; the scene clock never moves backwards.
    pub fn update(&mut self, delta_time: f32) {
        if delta_time < 0.0 {
            engine_warn!(
                "terra3d::Scene",
                "negative delta time {} clamped to zero",
                delta_time
            );
        }
        let delta = delta_time.max(0.0);
        self.current_time += delta;

        if let Some(light) = &self.light {
            if let Ok(mut light) = light.lock() {
                light.update(self.current_time);
            }
        }
        for drawable in &self.drawables {
            // A poisoned lock means the drawable panicked elsewhere;
            // skip it rather than abort the frame.
            let Ok(mut drawable) = drawable.lock() else {
                continue;
            };
            drawable.update(delta, self.current_time);
        }
    }

    /// Draw the scene: capture the per-frame shared state, then invoke
    /// each drawable in insertion order.
    ///
    /// Never mutates drawable state, and never fails because of a
    /// drawable, since drawables swallow their own submission failures.
    /// The returned error only reflects backend frame begin/end
    /// failures.
    /// An empty scene is a valid no-op frame.
    pub fn draw(&self, queue: &mut dyn RenderQueue) -> Result<()> {
        let frame = self.frame_state();
        queue.begin_frame(&frame)?;
        for drawable in &self.drawables {
            let Ok(drawable) = drawable.lock() else {
                continue;
            };
            drawable.draw(&frame, queue);
        }
        queue.end_frame()
    }

    /// Snapshot the shared per-frame bindings.
    fn frame_state(&self) -> FrameState {
        let camera = match self.camera.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let light = self
            .light
            .as_ref()
            .and_then(|light| light.lock().ok().map(|guard| *guard));
        FrameState {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            eye: camera.position(),
            light,
            time: self.current_time,
            gamma: self.gamma,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
