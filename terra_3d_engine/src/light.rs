//! Shared light state referenced by the scene.

use glam::Vec3;

/// A single point light with an optional orbit animation.
///
/// The scene references at most one light; absence is a valid
/// configuration meaning unlit rendering. When an orbit speed is set,
/// [`update`](Light::update) moves the light around the world Y axis
/// at its initial radius and height, driven by accumulated scene time
/// so the same clock always reproduces the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    orbit_speed: f32,
    orbit_radius: f32,
    orbit_height: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::new(10.0, 10.0, 10.0), Vec3::ONE, 1.0)
    }
}

impl Light {
    /// Create a static light.
    pub fn new(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            orbit_speed: 0.0,
            orbit_radius: Vec3::new(position.x, 0.0, position.z).length(),
            orbit_height: position.y,
        }
    }

    /// Builder: animate the light around the world Y axis, in radians
    /// per second of scene time. Zero disables the animation.
    pub fn with_orbit_speed(mut self, radians_per_second: f32) -> Self {
        self.orbit_speed = radians_per_second;
        self
    }

    /// Orbit angular speed in radians per second.
    pub fn orbit_speed(&self) -> f32 {
        self.orbit_speed
    }

    /// Advance the orbit animation to the given accumulated scene time.
    /// Static lights are untouched.
    pub fn update(&mut self, current_time: f32) {
        if self.orbit_speed == 0.0 {
            return;
        }
        let angle = self.orbit_speed * current_time;
        self.position = Vec3::new(
            self.orbit_radius * angle.cos(),
            self.orbit_height,
            self.orbit_radius * angle.sin(),
        );
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
