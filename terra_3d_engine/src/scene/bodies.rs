/// Concrete drawable variants for the planetary demo.
///
/// `Planet` is the standard case: stored transform, shared sphere
/// geometry, axial spin advanced from scene time. `Satellite` derives
/// its placement from elapsed time instead of a stored translation
/// (model-matrix override). `LightMarker` carries no geometry at all.

use std::sync::Arc;
use glam::{Mat4, Quat, Vec3};
use crate::resource::{Geometry, MaterialParams};
use crate::transform::Transform;
use super::drawable::Drawable;

// ============================================================================
// PLANET
// ============================================================================

/// A spinning body with a stored transform and shared geometry.
pub struct Planet {
    name: String,
    transform: Transform,
    material: MaterialParams,
    geometry: Arc<Geometry>,
    /// Axial spin in radians per second of scene time.
    spin_rate: f32,
    axis_tilt: Quat,
}

impl Planet {
    pub fn new(name: &str, position: Vec3, radius: f32, geometry: Arc<Geometry>) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::new()
                .with_position(position)
                .with_uniform_scale(radius),
            material: MaterialParams::default(),
            geometry,
            spin_rate: 0.0,
            axis_tilt: Quat::IDENTITY,
        }
    }

    pub fn with_material(mut self, material: MaterialParams) -> Self {
        self.material = material;
        self
    }

    /// Builder: spin around the (tilted) axis, in radians per second.
    pub fn with_spin_rate(mut self, radians_per_second: f32) -> Self {
        self.spin_rate = radians_per_second;
        self
    }

    /// Builder: tilt the spin axis away from world Y.
    pub fn with_axis_tilt(mut self, tilt: Quat) -> Self {
        self.axis_tilt = tilt;
        self.transform.rotation = tilt;
        self
    }

    pub fn material_mut(&mut self) -> &mut MaterialParams {
        &mut self.material
    }
}

impl Drawable for Planet {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn material_params(&self) -> &MaterialParams {
        &self.material
    }

    fn geometry(&self) -> Option<&Arc<Geometry>> {
        Some(&self.geometry)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, _delta_time: f32, current_time: f32) {
        if self.spin_rate == 0.0 {
            return;
        }
        // Orientation is a function of absolute scene time, so
        // replaying the same clock reproduces the same pose.
        self.transform.rotation =
            self.axis_tilt * Quat::from_rotation_y(self.spin_rate * current_time);
    }
}

// ============================================================================
// SATELLITE
// ============================================================================

/// A body whose placement is computed from elapsed time, not stored.
///
/// Overrides `model_matrix`: the stored transform only contributes
/// scale and orientation, the translation comes from the orbit angle
/// at the last updated time.
pub struct Satellite {
    name: String,
    transform: Transform,
    material: MaterialParams,
    geometry: Arc<Geometry>,
    orbit_center: Vec3,
    orbit_radius: f32,
    /// Radians per second of scene time.
    orbit_speed: f32,
    current_time: f32,
}

impl Satellite {
    pub fn new(
        name: &str,
        radius: f32,
        geometry: Arc<Geometry>,
        orbit_center: Vec3,
        orbit_radius: f32,
        orbit_speed: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::new().with_uniform_scale(radius),
            material: MaterialParams::default(),
            geometry,
            orbit_center,
            orbit_radius,
            orbit_speed,
            current_time: 0.0,
        }
    }

    pub fn with_material(mut self, material: MaterialParams) -> Self {
        self.material = material;
        self
    }

    /// World-space orbit position at the last updated time.
    pub fn orbit_position(&self) -> Vec3 {
        let angle = self.orbit_speed * self.current_time;
        self.orbit_center + self.orbit_radius * Vec3::new(angle.cos(), 0.0, angle.sin())
    }
}

impl Drawable for Satellite {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn material_params(&self) -> &MaterialParams {
        &self.material
    }

    fn geometry(&self) -> Option<&Arc<Geometry>> {
        Some(&self.geometry)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, _delta_time: f32, current_time: f32) {
        self.current_time = current_time;
    }

    fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.orbit_position()) * self.transform.model_matrix()
    }
}

// ============================================================================
// LIGHT MARKER
// ============================================================================

/// A drawable with no mesh: marks the light's position in the scene
/// without submitting geometry work. Exists so assembly code can treat
/// the light like any other scene entry.
pub struct LightMarker {
    transform: Transform,
    material: MaterialParams,
}

impl LightMarker {
    pub fn new(position: Vec3) -> Self {
        Self {
            transform: Transform::new().with_position(position),
            material: MaterialParams::default().with_emissive(Vec3::ONE),
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}

impl Drawable for LightMarker {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn material_params(&self) -> &MaterialParams {
        &self.material
    }

    fn geometry(&self) -> Option<&Arc<Geometry>> {
        None
    }

    fn name(&self) -> &str {
        "light marker"
    }
}

#[cfg(test)]
#[path = "bodies_tests.rs"]
mod tests;
