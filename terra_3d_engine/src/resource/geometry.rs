//! Resource-level geometry.
//!
//! A `Geometry` is an immutable triangle mesh shared between drawables
//! through `Arc`. There are no setters: sharing needs no
//! synchronization precisely because nothing can write through the
//! handle after construction.

use std::sync::Arc;
use bytemuck::{Pod, Zeroable};
use crate::engine_debug;
use crate::error::Result;
use crate::engine_bail;

/// Interleaved vertex: position, normal, texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Geometry creation descriptor.
pub struct GeometryDesc {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Immutable indexed triangle mesh.
pub struct Geometry {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Geometry {
    /// Validate and build a geometry from a descriptor.
    ///
    /// # Errors
    ///
    /// Empty vertex data, an index count that is not a multiple of 3,
    /// or an index referencing a vertex that does not exist.
    pub fn from_desc(desc: GeometryDesc) -> Result<Self> {
        if desc.vertices.is_empty() {
            engine_bail!("terra3d::Geometry", "'{}' has no vertices", desc.name);
        }
        if desc.indices.len() % 3 != 0 {
            engine_bail!(
                "terra3d::Geometry",
                "'{}' index count {} is not a multiple of 3",
                desc.name,
                desc.indices.len()
            );
        }
        let vertex_count = desc.vertices.len() as u32;
        if let Some(&bad) = desc.indices.iter().find(|&&i| i >= vertex_count) {
            engine_bail!(
                "terra3d::Geometry",
                "'{}' index {} out of bounds ({} vertices)",
                desc.name,
                bad,
                vertex_count
            );
        }

        engine_debug!(
            "terra3d::Geometry",
            "'{}' created: {} vertices, {} triangles",
            desc.name,
            desc.vertices.len(),
            desc.indices.len() / 3
        );

        Ok(Self {
            name: desc.name,
            vertices: desc.vertices,
            indices: desc.indices,
        })
    }

    /// Generate a unit UV sphere with `segments` longitudinal segments
    /// and as many latitudinal rings, already wrapped in `Arc` since
    /// spheres exist to be shared.
    ///
    /// Vertex count is `(segments + 1)²`, index count is
    /// `segments² * 6`.
    ///
    /// # Errors
    ///
    /// Fewer than 3 segments cannot form a closed surface.
    pub fn uv_sphere(name: &str, segments: u32) -> Result<Arc<Self>> {
        if segments < 3 {
            engine_bail!(
                "terra3d::Geometry",
                "'{}': {} segments cannot form a sphere",
                name,
                segments
            );
        }

        let rings = segments;
        let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
        for ring in 0..=rings {
            let theta = std::f32::consts::PI * ring as f32 / rings as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            for seg in 0..=segments {
                let phi = std::f32::consts::TAU * seg as f32 / segments as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();
                let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
                vertices.push(Vertex {
                    position: normal,
                    normal,
                    uv: [
                        seg as f32 / segments as f32,
                        ring as f32 / rings as f32,
                    ],
                });
            }
        }

        let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * (segments + 1) + seg;
                let b = a + segments + 1;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Ok(Arc::new(Self::from_desc(GeometryDesc {
            name: name.to_string(),
            vertices,
            indices,
        })?))
    }

    // ===== ACCESSORS =====

    /// Geometry name, used in log messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Raw vertex bytes, ready for a backend upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes, ready for a backend upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
