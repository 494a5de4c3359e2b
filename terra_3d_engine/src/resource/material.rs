//! Per-drawable material parameters.
//!
//! Pure data, owned and mutated by its drawable; the scene never
//! touches it. [`MaterialParams::to_uniform`] packs the parameters
//! into the `#[repr(C)]` layout a backend would upload.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Shading parameters for one drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub base_color: Vec3,
    pub roughness: f32,
    pub metallic: f32,
    pub emissive: Vec3,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            base_color: Vec3::splat(0.8),
            roughness: 0.5,
            metallic: 0.0,
            emissive: Vec3::ZERO,
        }
    }
}

impl MaterialParams {
    pub fn with_base_color(mut self, base_color: Vec3) -> Self {
        self.base_color = base_color;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_emissive(mut self, emissive: Vec3) -> Self {
        self.emissive = emissive;
        self
    }

    /// Pack into the GPU-facing layout.
    pub fn to_uniform(&self) -> MaterialUniform {
        MaterialUniform {
            base_color: [self.base_color.x, self.base_color.y, self.base_color.z, 1.0],
            emissive: [self.emissive.x, self.emissive.y, self.emissive.z, 0.0],
            roughness: self.roughness,
            metallic: self.metallic,
            _padding: [0.0; 2],
        }
    }
}

/// std140-friendly packed material, 48 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub emissive: [f32; 4],
    pub roughness: f32,
    pub metallic: f32,
    pub _padding: [f32; 2],
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
