/// Orbit camera: view state driven by keyboard/mouse events.
///
/// The camera orbits a fixed target point. A mouse button press
/// anchors a drag; subsequent motion events change yaw and pitch
/// relative to that anchor. The scroll wheel dollies in and out, and
/// keys nudge the orbit. View and projection matrices are computed on
/// demand from the stored state, so they always reflect the latest
/// events.
///
/// Input event handlers run synchronously on the frame thread between
/// frames; the camera itself never talks to the window toolkit.

use glam::{Mat4, Vec3};
use super::input::{Key, KeyAction};

// Pitch stops just short of the poles so look_at stays stable.
const MIN_PITCH: f32 = -1.55;
const MAX_PITCH: f32 = 1.55;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 500.0;
const DRAG_SENSITIVITY: f32 = 0.005;
const KEY_STEP: f32 = 0.05;
const DOLLY_STEP: f32 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    viewport_width: f32,
    viewport_height: f32,
    fov_y: f32,
    z_near: f32,
    z_far: f32,
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    /// Cursor position of the last press/motion event while dragging
    drag_anchor: Option<(f32, f32)>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            fov_y: std::f32::consts::FRAC_PI_4,
            z_near: 0.1,
            z_far: 1000.0,
            target: Vec3::ZERO,
            distance: 20.0,
            yaw: 0.0,
            pitch: 0.3,
            drag_anchor: None,
        }
    }
}

impl Camera {
    /// Camera at the default orbit, looking at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== EVENT INTAKE =====

    /// Handle a viewport resize.
    ///
    /// Non-positive dimensions (minimized window, misbehaving driver)
    /// leave the camera state untouched.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Handle a key event. Press and repeat nudge the orbit; release
    /// is ignored.
    pub fn key_event(&mut self, key: Key, action: KeyAction) {
        if action == KeyAction::Release {
            return;
        }
        match key {
            Key::A | Key::Left => self.yaw -= KEY_STEP,
            Key::D | Key::Right => self.yaw += KEY_STEP,
            Key::W | Key::Up => self.pitch = (self.pitch + KEY_STEP).clamp(MIN_PITCH, MAX_PITCH),
            Key::S | Key::Down => self.pitch = (self.pitch - KEY_STEP).clamp(MIN_PITCH, MAX_PITCH),
            Key::Home => {
                let home = Self::default();
                self.target = home.target;
                self.distance = home.distance;
                self.yaw = home.yaw;
                self.pitch = home.pitch;
            }
            Key::Other => {}
        }
    }

    /// Handle a mouse button press at the given cursor position:
    /// anchors a drag there. The frame driver decides when motion is
    /// forwarded (e.g. only while the cursor is captured), so there is
    /// no release event.
    pub fn mouse_button_event(&mut self, x: f32, y: f32) {
        self.drag_anchor = Some((x, y));
    }

    /// Handle cursor motion. Without a prior button press this is a
    /// no-op; while dragging it orbits yaw/pitch by the motion delta.
    pub fn mouse_motion_event(&mut self, x: f32, y: f32) {
        let Some((anchor_x, anchor_y)) = self.drag_anchor else {
            return;
        };
        self.yaw += (x - anchor_x) * DRAG_SENSITIVITY;
        self.pitch = (self.pitch - (y - anchor_y) * DRAG_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
        self.drag_anchor = Some((x, y));
    }

    /// Handle a scroll event: dolly toward or away from the target.
    pub fn mouse_scroll_event(&mut self, _dx: f32, dy: f32) {
        if dy > 0.0 {
            self.distance *= DOLLY_STEP;
        } else if dy < 0.0 {
            self.distance /= DOLLY_STEP;
        }
        self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    // ===== QUERIES =====

    /// World-space eye position on the orbit sphere.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// View matrix (world to camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection matrix for the current viewport aspect.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y,
            self.viewport_width / self.viewport_height,
            self.z_near,
            self.z_far,
        )
    }

    /// Current viewport dimensions in pixels.
    pub fn viewport_size(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Orbit target point.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
