//! Spatial transform of a drawable.

use glam::{Mat4, Quat, Vec3};

/// Position, rotation and scale producing a model matrix.
///
/// Pure data: [`model_matrix`](Transform::model_matrix) has no side
/// effects, can be called any number of times per frame, and always
/// reflects the latest mutated state. Degenerate values (zero scale)
/// are accepted, not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder: set the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set a per-axis scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set a uniform scale on all three axes.
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Local-to-world matrix: scale, then rotation, then translation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
